use console::style;
use std::io::{self, Write};

use crate::core::models::SearchResult;
use crate::global_constants;

/// Prints results under a `== engine ==` header. A new header starts whenever
/// the engine differs from the previous entry, so an engine that reappears
/// after another one gets a second header.
///
/// Returns `false` when there was nothing to show.
pub fn display_results(results: &[SearchResult], out: &mut impl Write) -> io::Result<bool> {
    if results.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            style(format!("[!] {}", global_constants::USER_MESSAGE_NO_RESULTS)).red()
        )?;
        return Ok(false);
    }

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style(format!(
            "[+] Search Results ({} sources found):",
            results.len()
        ))
        .green()
    )?;

    let mut current_engine: Option<&str> = None;
    for (position, result) in results.iter().enumerate() {
        if current_engine != Some(result.engine.as_str()) {
            current_engine = Some(result.engine.as_str());
            writeln!(out)?;
            writeln!(out, "{}", style(format!("== {} ==", result.engine)).cyan())?;
        }

        writeln!(
            out,
            "{} {} {}",
            style(format!("{}.", position + 1)).white(),
            style(format!("[{}]", result.label)).yellow(),
            style(&result.url).blue()
        )?;
    }

    out.flush()?;
    Ok(true)
}
