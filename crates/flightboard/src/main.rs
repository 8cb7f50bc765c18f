//! `fliboard` - CLI for flightboard
//!
//! This binary is the board's renderer collaborator: it drives one board
//! cycle per invocation and prints the resulting cards.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use chrono::Local;
use clap::Parser;

use flightboard::board::BoardSettings;
use flightboard::cli::{direction_for, Cli, Command, ConfigCommand};
use flightboard::source::{self, HttpDirectorySource, HttpFlightSource};
use flightboard::{init_logging, BoardEngine, BoardOutcome, BoardSnapshot, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    // Execute the command
    match cli.command {
        Command::Board(cmd) => {
            let engine = build_engine(&config)?;
            let outcome = engine
                .load_default(direction_for(cmd.arrivals), Local::now().naive_local())
                .await?;
            render(outcome, config.board.limit, cmd.json)
        }
        Command::Search(cmd) => {
            let engine = build_engine(&config)?;
            let outcome = engine
                .search(
                    &cmd.term,
                    direction_for(cmd.arrivals),
                    Local::now().naive_local(),
                )
                .await?;
            render(outcome, config.board.limit, cmd.json)
        }
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn build_engine(
    config: &Config,
) -> flightboard::Result<BoardEngine<HttpFlightSource, HttpDirectorySource>> {
    let client = source::http_client(config.request_timeout())?;
    Ok(BoardEngine::new(
        HttpFlightSource::new(client.clone(), config.sources.flight_url.clone()),
        HttpDirectorySource::new(client, config.sources.directory_url.clone()),
        BoardSettings::from(config),
    ))
}

fn render(outcome: BoardOutcome, limit: usize, json: bool) -> anyhow::Result<()> {
    let snapshot = match outcome {
        // Single-shot invocations are never superseded; nothing to show.
        BoardOutcome::Superseded => return Ok(()),
        BoardOutcome::Rendered(snapshot) => snapshot,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    print_snapshot(&snapshot, limit);
    Ok(())
}

fn print_snapshot(snapshot: &BoardSnapshot, limit: usize) {
    let heading = if snapshot.direction.is_arrival() {
        "Arrival"
    } else {
        "Departure"
    };
    match &snapshot.search_term {
        Some(term) => println!("{heading} Information  Search: {term}"),
        None => println!("{heading} Information  (Next {limit} Flights)"),
    }

    if snapshot.cards.is_empty() {
        println!();
        println!("No flights to show.");
        return;
    }

    for (index, card) in snapshot.cards.iter().enumerate() {
        println!();
        println!(
            "{:>2}. {}: {}",
            index + 1,
            snapshot.direction.location_heading(),
            card.location_label
        );
        println!("    Flight No.:     {}", card.flight_numbers);
        println!("    Scheduled Time: {}", card.scheduled_time_label);

        let secondary = card
            .secondary_fields
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("   ");
        println!("    {secondary}");
        println!("    Status:         {}", card.status);
    }
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Sources]");
                println!("  Flight data URL:  {}", config.sources.flight_url);
                println!("  Directory URL:    {}", config.sources.directory_url);
                println!("  Language:         {}", config.sources.lang);
                println!("  Include cargo:    {}", config.sources.include_cargo);
                println!(
                    "  Request timeout:  {}s",
                    config.sources.request_timeout_secs
                );
                println!();
                println!("[Board]");
                println!("  Limit:            {}", config.board.limit);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
