//! Command-line interface for flightboard.
//!
//! This module provides the CLI structure for the `fliboard` binary. The
//! binary doubles as the board's renderer: it consumes snapshots and
//! prints them.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{direction_for, BoardCommand, ConfigCommand, SearchCommand};

/// fliboard - Live airport flight information board
///
/// Fetches arrival/departure data and an airport directory, then shows
/// the next upcoming flights as cards, with free-text search.
#[derive(Debug, Parser)]
#[command(name = "fliboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the next upcoming flights
    Board(BoardCommand),

    /// Search flights by location
    Search(SearchCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
