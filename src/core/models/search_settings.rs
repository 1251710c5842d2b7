use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub max_concurrent_requests: usize,
    pub submit_delay_millis: u64,
    pub browser_open_delay_millis: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            user_agent: global_constants::DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: global_constants::DEFAULT_REQUEST_TIMEOUT_SECS,
            max_concurrent_requests: global_constants::DEFAULT_MAX_CONCURRENT_REQUESTS,
            submit_delay_millis: global_constants::DEFAULT_SUBMIT_DELAY_MILLIS,
            browser_open_delay_millis: global_constants::DEFAULT_BROWSER_OPEN_DELAY_MILLIS,
        }
    }
}

impl SearchSettings {
    /// Reads settings from `explicit_path` when given. Without one the fixed
    /// defaults apply; no settings file is ever picked up implicitly.
    pub fn load(explicit_path: Option<&Path>) -> anyhow::Result<Self> {
        match explicit_path {
            Some(path) => Self::load_from_file(path),
            None => {
                log::info!(
                    "{} No settings file given, using defaults",
                    global_constants::LOG_TAG_SETTINGS
                );
                Ok(Self::default())
            }
        }
    }

    fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        let settings: SearchSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;
        settings.validate()?;

        log::info!(
            "{} Loaded settings from {:?}",
            global_constants::LOG_TAG_SETTINGS,
            path
        );
        log::debug!(
            "{} Concurrency: {}, timeout: {}s, submit delay: {}ms",
            global_constants::LOG_TAG_SETTINGS,
            settings.max_concurrent_requests,
            settings.request_timeout_secs,
            settings.submit_delay_millis
        );

        Ok(settings)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.max_concurrent_requests == 0 {
            anyhow::bail!("max_concurrent_requests must be greater than zero");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_millis)
    }

    pub fn browser_open_delay(&self) -> Duration {
        Duration::from_millis(self.browser_open_delay_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_settings_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_settings_match_fixed_search_behavior() {
        let settings = SearchSettings::default();

        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
        assert_eq!(settings.max_concurrent_requests, 5);
        assert_eq!(settings.submit_delay(), Duration::from_secs(2));
        assert_eq!(settings.browser_open_delay(), Duration::from_secs(1));
        assert!(settings.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(SearchSettings::load(None).unwrap(), SearchSettings::default());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults_for_missing_fields() {
        let file = write_settings_file(r#"{ "submit_delay_millis": 250 }"#);

        let settings = SearchSettings::load(Some(file.path())).unwrap();

        assert_eq!(settings.submit_delay_millis, 250);
        assert_eq!(settings.max_concurrent_requests, 5);
        assert_eq!(settings.request_timeout_secs, 10);
    }

    #[test]
    fn test_load_rejects_zero_concurrency() {
        let file = write_settings_file(r#"{ "max_concurrent_requests": 0 }"#);

        let error = SearchSettings::load(Some(file.path())).unwrap_err();

        assert!(error.to_string().contains("max_concurrent_requests"));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let file = write_settings_file("{ not json");

        assert!(SearchSettings::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_load_fails_when_explicit_path_is_missing() {
        let directory = tempfile::tempdir().unwrap();
        let missing_path = directory.path().join("absent.json");

        assert!(SearchSettings::load(Some(&missing_path)).is_err());
    }
}
