pub mod browser_prompt;
pub mod console_output;
pub mod console_reporter;
