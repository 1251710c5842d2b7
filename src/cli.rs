use clap::Parser;
use std::path::PathBuf;

use crate::core::models::SearchEngine;

#[derive(Parser, Debug)]
#[command(
    name = "dork-person-finder",
    version,
    about = "OSINT Missing Person Finder"
)]
pub struct CliArgs {
    /// First name of the person
    #[arg(short = 'f', long)]
    pub firstname: String,

    /// Last name of the person
    #[arg(short = 'l', long)]
    pub lastname: String,

    /// Search engine to use
    #[arg(short = 'e', long, value_enum, default_value_t = SearchEngine::Google)]
    pub engine: SearchEngine,

    /// Use advanced dorks for more comprehensive but slower search
    #[arg(short = 'a', long)]
    pub advanced: bool,

    /// JSON settings file overriding timeouts, delays and concurrency
    #[arg(short = 's', long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Skip the prompt to open results in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Disable coloured console output
    #[arg(long)]
    pub no_color: bool,
}

pub fn parse_cli() -> CliArgs {
    CliArgs::parse()
}
