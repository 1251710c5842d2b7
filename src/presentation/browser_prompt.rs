use console::style;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::core::interfaces::adapters::BrowserLauncher;
use crate::core::models::SearchResult;
use crate::global_constants;
use crate::presentation::console_output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenChoice {
    All,
    /// Zero-based index into the result list.
    Single(usize),
    Nothing,
}

/// Interprets the operator's answer. Numbers are 1-indexed and must fall within
/// the result list; anything unrecognised means "open nothing".
pub fn parse_open_choice(input: &str, result_count: usize) -> OpenChoice {
    let answer = input.trim();

    if answer.eq_ignore_ascii_case("y") {
        return OpenChoice::All;
    }

    if answer.is_empty() || !answer.chars().all(|character| character.is_ascii_digit()) {
        return OpenChoice::Nothing;
    }

    match answer.parse::<usize>() {
        Ok(number) if (1..=result_count).contains(&number) => OpenChoice::Single(number - 1),
        _ => OpenChoice::Nothing,
    }
}

/// Asks whether to open results and opens the chosen ones. Returns how many
/// URLs were handed to the browser.
pub fn prompt_and_open_results(
    results: &[SearchResult],
    input: &mut impl BufRead,
    out: &mut impl Write,
    launcher: &dyn BrowserLauncher,
    open_delay: Duration,
) -> io::Result<usize> {
    if results.is_empty() {
        return Ok(0);
    }

    writeln!(out)?;
    write!(
        out,
        "{}",
        style(format!("[?] {}", global_constants::USER_MESSAGE_OPEN_PROMPT)).green()
    )?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let opened = match parse_open_choice(&answer, results.len()) {
        OpenChoice::All => {
            console_output::print_warning(global_constants::USER_MESSAGE_OPENING_ALL);
            open_all(results, launcher, open_delay)
        }
        OpenChoice::Single(index) => {
            console_output::print_warning(format!(
                "Opening result {} in browser...",
                index + 1
            ));
            usize::from(open_one(&results[index], launcher))
        }
        OpenChoice::Nothing => {
            log::debug!(
                "{} Operator declined to open results",
                global_constants::LOG_TAG_BROWSER
            );
            0
        }
    };

    Ok(opened)
}

fn open_all(
    results: &[SearchResult],
    launcher: &dyn BrowserLauncher,
    open_delay: Duration,
) -> usize {
    let mut opened = 0;
    for result in results {
        if open_one(result, launcher) {
            opened += 1;
        }
        std::thread::sleep(open_delay);
    }
    opened
}

fn open_one(result: &SearchResult, launcher: &dyn BrowserLauncher) -> bool {
    match launcher.open_url(&result.url) {
        Ok(()) => true,
        Err(error) => {
            log::error!(
                "{} Failed to open {}: {:#}",
                global_constants::LOG_TAG_BROWSER,
                result.url,
                error
            );
            console_output::print_error(format!("Could not open {}: {}", result.url, error));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Mutex;

    struct MockBrowserLauncher {
        opened_urls: Mutex<Vec<String>>,
        fail_on: Option<String>,
    }

    impl MockBrowserLauncher {
        fn new() -> Self {
            Self {
                opened_urls: Mutex::new(Vec::new()),
                fail_on: None,
            }
        }

        fn failing_on(url: &str) -> Self {
            Self {
                opened_urls: Mutex::new(Vec::new()),
                fail_on: Some(url.to_string()),
            }
        }

        fn get_opened_urls(&self) -> Vec<String> {
            self.opened_urls.lock().unwrap().clone()
        }
    }

    impl BrowserLauncher for MockBrowserLauncher {
        fn open_url(&self, url: &str) -> anyhow::Result<()> {
            if self.fail_on.as_deref() == Some(url) {
                anyhow::bail!("no browser available");
            }
            self.opened_urls.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn create_results(count: usize) -> Vec<SearchResult> {
        (1..=count)
            .map(|n| {
                SearchResult::new("Google", format!("dork {}", n), format!("https://r/{}", n))
            })
            .collect()
    }

    fn run_prompt(
        answer: &str,
        results: &[SearchResult],
        launcher: &MockBrowserLauncher,
    ) -> usize {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut out = Vec::new();
        prompt_and_open_results(results, &mut input, &mut out, launcher, Duration::ZERO).unwrap()
    }

    #[test]
    fn test_parse_open_choice_accepts_y_in_either_case() {
        assert_eq!(parse_open_choice("y\n", 3), OpenChoice::All);
        assert_eq!(parse_open_choice("Y", 3), OpenChoice::All);
    }

    #[test]
    fn test_parse_open_choice_maps_number_to_zero_based_index() {
        assert_eq!(parse_open_choice("3\n", 5), OpenChoice::Single(2));
        assert_eq!(parse_open_choice("1", 1), OpenChoice::Single(0));
    }

    #[test]
    fn test_parse_open_choice_rejects_out_of_range_and_garbage() {
        assert_eq!(parse_open_choice("0", 5), OpenChoice::Nothing);
        assert_eq!(parse_open_choice("6", 5), OpenChoice::Nothing);
        assert_eq!(parse_open_choice("-1", 5), OpenChoice::Nothing);
        assert_eq!(parse_open_choice("n", 5), OpenChoice::Nothing);
        assert_eq!(parse_open_choice("yes", 5), OpenChoice::Nothing);
        assert_eq!(parse_open_choice("", 5), OpenChoice::Nothing);
    }

    #[test]
    fn test_number_opens_exactly_that_result() {
        let launcher = MockBrowserLauncher::new();
        let results = create_results(5);

        let opened = run_prompt("3\n", &results, &launcher);

        assert_eq!(opened, 1);
        assert_eq!(launcher.get_opened_urls(), vec!["https://r/3".to_string()]);
    }

    #[test]
    fn test_y_opens_every_result_in_order() {
        let launcher = MockBrowserLauncher::new();
        let results = create_results(3);

        let opened = run_prompt("y\n", &results, &launcher);

        assert_eq!(opened, 3);
        assert_eq!(
            launcher.get_opened_urls(),
            vec!["https://r/1", "https://r/2", "https://r/3"]
        );
    }

    #[test]
    fn test_opening_all_waits_between_opens() {
        let launcher = MockBrowserLauncher::new();
        let results = create_results(3);
        let open_delay = Duration::from_millis(25);
        let mut input = Cursor::new(b"y\n".to_vec());
        let mut out = Vec::new();

        let started = std::time::Instant::now();
        let opened =
            prompt_and_open_results(&results, &mut input, &mut out, &launcher, open_delay)
                .unwrap();
        let elapsed = started.elapsed();

        assert_eq!(opened, 3);
        assert!(elapsed >= open_delay * 3, "opened all after only {:?}", elapsed);
    }

    #[test]
    fn test_other_answers_open_nothing() {
        let launcher = MockBrowserLauncher::new();

        assert_eq!(run_prompt("n\n", &create_results(2), &launcher), 0);
        assert!(launcher.get_opened_urls().is_empty());
    }

    #[test]
    fn test_empty_results_skip_the_prompt() {
        let launcher = MockBrowserLauncher::new();
        let mut input = Cursor::new(b"y\n".to_vec());
        let mut out = Vec::new();

        let opened =
            prompt_and_open_results(&[], &mut input, &mut out, &launcher, Duration::ZERO).unwrap();

        assert_eq!(opened, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_failed_open_does_not_stop_the_rest() {
        let launcher = MockBrowserLauncher::failing_on("https://r/2");

        let opened = run_prompt("y\n", &create_results(3), &launcher);

        assert_eq!(opened, 2);
        assert_eq!(launcher.get_opened_urls(), vec!["https://r/1", "https://r/3"]);
    }
}
