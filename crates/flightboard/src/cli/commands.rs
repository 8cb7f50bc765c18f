//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::schedule::Direction;

/// Board command arguments.
#[derive(Debug, Args)]
pub struct BoardCommand {
    /// Show arrivals instead of departures
    #[arg(short, long)]
    pub arrivals: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Term matched against municipality, airport name, or IATA code
    pub term: String,

    /// Search arrivals instead of departures
    #[arg(short, long)]
    pub arrivals: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        file: Option<PathBuf>,
    },
}

/// Map an `--arrivals` flag to a board direction.
#[must_use]
pub fn direction_for(arrivals: bool) -> Direction {
    if arrivals {
        Direction::Arrival
    } else {
        Direction::Departure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_for_flag() {
        assert_eq!(direction_for(true), Direction::Arrival);
        assert_eq!(direction_for(false), Direction::Departure);
    }
}
