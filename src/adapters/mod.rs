mod reqwest_http_transport;
mod system_browser_launcher;

pub use reqwest_http_transport::ReqwestHttpTransport;
pub use system_browser_launcher::SystemBrowserLauncher;
