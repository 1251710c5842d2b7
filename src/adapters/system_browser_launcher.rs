use anyhow::Result;

use crate::core::interfaces::adapters::BrowserLauncher;
use crate::global_constants;

/// Hands URLs to the operating system's default browser.
#[derive(Debug, Default)]
pub struct SystemBrowserLauncher;

impl SystemBrowserLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl BrowserLauncher for SystemBrowserLauncher {
    fn open_url(&self, url: &str) -> Result<()> {
        log::info!("{} Opening {}", global_constants::LOG_TAG_BROWSER, url);
        open::that(url)?;
        Ok(())
    }
}
