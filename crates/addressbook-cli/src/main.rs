use std::io;

use addressbook_core::{AddressBook, Birthday};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod repl;
mod view;

#[derive(Parser)]
#[command(name = "addressbook-cli", version, about = "Addressbook assistant bot")]
struct Cli {
    /// Reference date for the `birthdays` command, in DD.MM.YYYY form
    /// (defaults to the current local date)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    Birthday::parse(raw)
        .map(|birthday| birthday.date())
        .map_err(|e| e.to_string())
}

fn main() {
    // Logging goes to stderr so the conversation on stdout stays clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    let mut book = AddressBook::new();
    let mut view = view::ConsoleView;

    if let Err(e) = repl::run(io::stdin().lock(), &mut book, &mut view, today) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
