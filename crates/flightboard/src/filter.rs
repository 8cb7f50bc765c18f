//! Free-text flight filtering.
//!
//! This module narrows raw day schedules to the legs whose relevant
//! location codes resolve to an airport matching a search term. Filtering
//! is a pure view over the input; nothing is mutated.

use tracing::debug;

use crate::directory::{AirportRecord, IataDirectory};
use crate::schedule::{DaySchedule, Direction};

/// Filters day schedules against a free-text search term.
#[derive(Debug, Clone, Copy)]
pub struct FlightFilter<'a> {
    directory: &'a IataDirectory,
}

impl<'a> FlightFilter<'a> {
    /// Create a filter backed by the given airport directory.
    #[must_use]
    pub fn new(directory: &'a IataDirectory) -> Self {
        Self { directory }
    }

    /// Case-insensitive substring match of `term` against an airport's
    /// municipality, name, or IATA code. The empty term matches everything.
    ///
    /// `term` must already be lower-cased; [`FlightFilter::filter_by_term`]
    /// lowers it once per call.
    #[must_use]
    pub fn matches(term: &str, airport: &AirportRecord) -> bool {
        airport.municipality.to_lowercase().contains(term)
            || airport.name.to_lowercase().contains(term)
            || airport.iata_code.to_lowercase().contains(term)
    }

    /// Keep only the legs whose relevant location codes match `term`.
    ///
    /// The relevant codes are the origin codes for arrivals and the
    /// destination codes for departures. A leg is included once per
    /// matching code, so a leg whose codes match twice appears twice.
    /// Codes that do not resolve in the directory are skipped as
    /// non-matches. Per-day grouping is preserved; a day whose legs all
    /// miss stays present with an empty leg list.
    ///
    /// An empty term returns the input unchanged (identity).
    #[must_use]
    pub fn filter_by_term(
        &self,
        schedules: &[DaySchedule],
        term: &str,
        direction: Direction,
    ) -> Vec<DaySchedule> {
        let term = term.to_lowercase();
        if term.is_empty() {
            return schedules.to_vec();
        }

        let filtered: Vec<DaySchedule> = schedules
            .iter()
            .map(|day| {
                let legs = day
                    .legs
                    .iter()
                    .flat_map(|leg| {
                        direction
                            .location_codes(leg)
                            .iter()
                            .filter(|code| {
                                self.directory
                                    .resolve(code)
                                    .is_some_and(|airport| Self::matches(&term, airport))
                            })
                            .map(|_| leg.clone())
                            .collect::<Vec<_>>()
                    })
                    .collect();
                DaySchedule {
                    date: day.date.clone(),
                    legs,
                }
            })
            .collect();

        debug!(
            term = %term,
            %direction,
            legs = filtered.iter().map(|day| day.legs.len()).sum::<usize>(),
            "filtered schedules"
        );
        filtered
    }
}
