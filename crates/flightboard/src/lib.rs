//! `flightboard` - A live airport flight information board
//!
//! This library fetches arrival/departure schedules and an airport-code
//! directory, filters and sorts the legs, and produces render-ready cards
//! for the next upcoming flights. Rendering itself is left to callers.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod board;
pub mod cli;
pub mod config;
pub mod directory;
pub mod display;
pub mod error;
pub mod filter;
pub mod logging;
pub mod schedule;
pub mod scheduler;
pub mod source;

pub use board::{BoardEngine, BoardOutcome, BoardSettings, BoardSnapshot};
pub use config::Config;
pub use directory::{AirportRecord, IataDirectory};
pub use display::DisplayCard;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use schedule::{DaySchedule, Direction, FlightLeg, ScheduledFlight};
