mod browser_launcher;
mod http_transport;

pub use browser_launcher::BrowserLauncher;
pub use http_transport::HttpTransport;
