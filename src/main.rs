mod adapters;
mod cli;
mod core;
mod global_constants;
mod presentation;

use anyhow::{Context, Result};
use std::io;
use std::sync::Arc;

use crate::adapters::{ReqwestHttpTransport, SystemBrowserLauncher};
use crate::core::models::{Person, SearchSettings};
use crate::core::orchestrators::SearchOrchestrator;
use crate::presentation::{browser_prompt, console_output, console_reporter};

fn main() -> Result<()> {
    env_logger::init();

    let cli = cli::parse_cli();
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    log::info!(
        "{} Starting {}",
        global_constants::LOG_TAG_MAIN,
        global_constants::APPLICATION_NAME
    );
    console_output::print_banner(global_constants::STARTUP_BANNER);

    let settings = SearchSettings::load(cli.settings.as_deref())?;
    let http_transport = Arc::new(ReqwestHttpTransport::build(&settings)?);
    let orchestrator = SearchOrchestrator::new(http_transport, settings.clone());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let person = Person::new(cli.firstname, cli.lastname);
    if runtime
        .block_on(orchestrator.run_search(&person, cli.engine, cli.advanced))
        .is_err()
    {
        return Ok(());
    }

    let results = orchestrator.results();
    let mut stdout = io::stdout().lock();
    console_reporter::display_results(&results, &mut stdout)?;

    if !cli.no_open {
        let launcher = SystemBrowserLauncher::new();
        browser_prompt::prompt_and_open_results(
            &results,
            &mut io::stdin().lock(),
            &mut stdout,
            &launcher,
            settings.browser_open_delay(),
        )?;
    }

    log::info!("{} Finished", global_constants::LOG_TAG_MAIN);
    Ok(())
}
