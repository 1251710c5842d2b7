pub const APPLICATION_NAME: &str = "OSINT Missing Person Finder";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_DORKS: &str = "[DORKS]";
pub const LOG_TAG_HTTP: &str = "[HTTP]";
pub const LOG_TAG_BROWSER: &str = "[BROWSER]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 5;
pub const DEFAULT_SUBMIT_DELAY_MILLIS: u64 = 2000;
pub const DEFAULT_BROWSER_OPEN_DELAY_MILLIS: u64 = 1000;

pub const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search?q=";
pub const BING_SEARCH_URL: &str = "https://www.bing.com/search?q=";
pub const DUCKDUCKGO_SEARCH_URL: &str = "https://duckduckgo.com/?q=";
pub const YANDEX_SEARCH_URL: &str = "https://yandex.com/search/?text=";

pub const PEOPLE_DATABASE_TAG: &str = "PeopleDB";
pub const HTTP_STATUS_OK: u16 = 200;

pub const USER_MESSAGE_ADVANCED_MODE: &str = "Advanced mode enabled - using specialized dorks";
pub const USER_MESSAGE_SEARCHING_DATABASES: &str = "Searching people databases...";
pub const USER_MESSAGE_NO_RESULTS: &str = "No results found";
pub const USER_MESSAGE_OPEN_PROMPT: &str =
    "Open results in browser? (y/n, or number to open specific result): ";
pub const USER_MESSAGE_OPENING_ALL: &str = "Opening all results in browser...";

pub const STARTUP_BANNER: &str = r#"
=============================================
        OSINT MISSING PERSON FINDER
=============================================
   A tool for finding missing persons
   through open-source intelligence (OSINT)
=============================================
"#;
