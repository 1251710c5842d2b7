use clap::ValueEnum;
use std::fmt;

use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SearchEngine {
    #[default]
    #[value(name = "Google")]
    Google,
    #[value(name = "Bing")]
    Bing,
    #[value(name = "DuckDuckGo")]
    DuckDuckGo,
    #[value(name = "Yandex")]
    Yandex,
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchEngine::Google => write!(f, "Google"),
            SearchEngine::Bing => write!(f, "Bing"),
            SearchEngine::DuckDuckGo => write!(f, "DuckDuckGo"),
            SearchEngine::Yandex => write!(f, "Yandex"),
        }
    }
}

impl SearchEngine {
    pub fn base_url(&self) -> &'static str {
        match self {
            SearchEngine::Google => global_constants::GOOGLE_SEARCH_URL,
            SearchEngine::Bing => global_constants::BING_SEARCH_URL,
            SearchEngine::DuckDuckGo => global_constants::DUCKDUCKGO_SEARCH_URL,
            SearchEngine::Yandex => global_constants::YANDEX_SEARCH_URL,
        }
    }

    pub fn construct_search_url(&self, dork: &str) -> String {
        let encoded_query = urlencoding::encode(dork);
        let mut url = String::with_capacity(self.base_url().len() + encoded_query.len());
        url.push_str(self.base_url());
        url.push_str(&encoded_query);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_engine_maps_to_its_search_prefix() {
        assert_eq!(
            SearchEngine::Google.base_url(),
            "https://www.google.com/search?q="
        );
        assert_eq!(SearchEngine::Bing.base_url(), "https://www.bing.com/search?q=");
        assert_eq!(SearchEngine::DuckDuckGo.base_url(), "https://duckduckgo.com/?q=");
        assert_eq!(
            SearchEngine::Yandex.base_url(),
            "https://yandex.com/search/?text="
        );
    }

    #[test]
    fn test_construct_search_url_escapes_quotes_and_spaces() {
        let url = SearchEngine::Bing.construct_search_url("\"Jane Doe\" site:github.com");

        assert_eq!(
            url,
            "https://www.bing.com/search?q=%22Jane%20Doe%22%20site%3Agithub.com"
        );
    }

    #[test]
    fn test_display_matches_cli_spelling() {
        assert_eq!(SearchEngine::DuckDuckGo.to_string(), "DuckDuckGo");
        assert_eq!(SearchEngine::default(), SearchEngine::Google);
    }
}
