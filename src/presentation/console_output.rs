use console::style;
use std::fmt::Display;

pub fn print_info(message: impl Display) {
    println!("{}", style(format!("[*] {message}")).blue());
}

pub fn print_success(message: impl Display) {
    println!("{}", style(format!("[+] {message}")).green());
}

pub fn print_warning(message: impl Display) {
    println!("{}", style(format!("[!] {message}")).yellow());
}

pub fn print_error(message: impl Display) {
    println!("{}", style(format!("[!] {message}")).red());
}

/// "[*] Searching Google: <dork>" with the dork highlighted.
pub fn print_search_started(engine: impl Display, dork: &str) {
    println!(
        "{} {}",
        style(format!("[*] Searching {engine}:")).blue(),
        style(dork).yellow()
    );
}

pub fn print_banner(banner: &str) {
    println!("{}", style(banner).cyan());
}
