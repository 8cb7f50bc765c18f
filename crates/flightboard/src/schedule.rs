//! Flight schedule data model.
//!
//! This module defines the wire-level types delivered by the flight data
//! source (days of legs) and the derived types the board works with.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Arrival or departure context for a board view.
///
/// The direction decides which location codes are relevant for filtering
/// and which secondary field set a card carries. It is selected once per
/// cycle and threaded through, never re-derived from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Flights arriving at the airport.
    Arrival,
    /// Flights departing from the airport.
    Departure,
}

impl Direction {
    /// Whether this is the arrival context.
    #[must_use]
    pub fn is_arrival(self) -> bool {
        matches!(self, Self::Arrival)
    }

    /// The location codes relevant in this direction: origin codes for
    /// arrivals, destination codes for departures.
    #[must_use]
    pub fn location_codes(self, leg: &FlightLeg) -> &[String] {
        match self {
            Self::Arrival => &leg.origin,
            Self::Departure => &leg.destination,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arrival => write!(f, "arrival"),
            Self::Departure => write!(f, "departure"),
        }
    }
}

/// A single flight-number entry on a leg.
///
/// Codeshared legs carry several of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightNumber {
    /// The published flight number, e.g. "AF 185".
    pub no: String,
}

/// One flight occurrence on a specific day (a "leg").
///
/// Exactly one of the arrival-only (`stand`/`hall`/`baggage`) or
/// departure-only (`terminal`/`aisle`/`gate`) field groups is populated,
/// depending on the direction the data was queried for. The parser does
/// not enforce this; absent fields stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightLeg {
    /// Scheduled time of day, zero-padded "HH:MM".
    pub time: String,

    /// Flight numbers sharing this leg.
    #[serde(rename = "flight", default)]
    pub flight_numbers: Vec<FlightNumber>,

    /// Origin airport IATA codes (relevant for arrivals).
    #[serde(default)]
    pub origin: Vec<String>,

    /// Destination airport IATA codes (relevant for departures).
    #[serde(default)]
    pub destination: Vec<String>,

    /// Operational status, passed through to the display verbatim.
    #[serde(default)]
    pub status: String,

    /// Parking stand (arrivals).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stand: Option<String>,

    /// Arrival hall (arrivals).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hall: Option<String>,

    /// Baggage belt (arrivals).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baggage: Option<String>,

    /// Terminal (departures).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,

    /// Check-in aisle (departures).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aisle: Option<String>,

    /// Boarding gate (departures).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
}

/// A day's worth of legs grouped under one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Calendar date, zero-padded "YYYY-MM-DD".
    pub date: String,

    /// The legs scheduled on this date.
    #[serde(rename = "list", default)]
    pub legs: Vec<FlightLeg>,
}

/// A leg paired with its date and the combined timestamp.
///
/// Derived per cycle for sorting and the upcoming cutoff; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledFlight {
    /// The underlying leg.
    pub leg: FlightLeg,

    /// The calendar date the leg belongs to, "YYYY-MM-DD".
    pub date: String,

    /// `date` and the leg's `time` combined.
    pub timestamp: NaiveDateTime,
}

impl ScheduledFlight {
    /// Combine a day's date with a leg's time into one scheduled flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] if the date or time string does
    /// not parse.
    pub fn combine(date: &str, leg: &FlightLeg) -> Result<Self> {
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d");
        let time = NaiveTime::parse_from_str(&leg.time, "%H:%M");
        match (day, time) {
            (Ok(day), Ok(time)) => Ok(Self {
                leg: leg.clone(),
                date: date.to_string(),
                timestamp: NaiveDateTime::new(day, time),
            }),
            _ => Err(Error::InvalidTimestamp {
                date: date.to_string(),
                time: leg.time.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(time: &str) -> FlightLeg {
        FlightLeg {
            time: time.to_string(),
            flight_numbers: vec![FlightNumber {
                no: "FB 101".to_string(),
            }],
            origin: Vec::new(),
            destination: vec!["CDG".to_string()],
            status: "On time".to_string(),
            stand: None,
            hall: None,
            baggage: None,
            terminal: Some("1".to_string()),
            aisle: Some("A".to_string()),
            gate: Some("23".to_string()),
        }
    }

    #[test]
    fn test_direction_is_arrival() {
        assert!(Direction::Arrival.is_arrival());
        assert!(!Direction::Departure.is_arrival());
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Arrival.to_string(), "arrival");
        assert_eq!(Direction::Departure.to_string(), "departure");
    }

    #[test]
    fn test_direction_location_codes() {
        let mut leg = leg("10:00");
        leg.origin = vec!["HND".to_string()];

        assert_eq!(Direction::Arrival.location_codes(&leg), ["HND"]);
        assert_eq!(Direction::Departure.location_codes(&leg), ["CDG"]);
    }

    #[test]
    fn test_combine_builds_timestamp() {
        let flight = ScheduledFlight::combine("2024-03-01", &leg("09:30")).unwrap();

        assert_eq!(flight.date, "2024-03-01");
        assert_eq!(flight.timestamp.to_string(), "2024-03-01 09:30:00");
        assert_eq!(flight.leg.time, "09:30");
    }

    #[test]
    fn test_combine_rejects_bad_time() {
        let err = ScheduledFlight::combine("2024-03-01", &leg("9 o'clock")).unwrap_err();
        assert!(err.to_string().contains("9 o'clock"));
    }

    #[test]
    fn test_combine_rejects_bad_date() {
        let err = ScheduledFlight::combine("01/03/2024", &leg("09:30")).unwrap_err();
        assert!(err.to_string().contains("01/03/2024"));
    }

    #[test]
    fn test_day_schedule_from_wire_json() {
        let json = r#"{
            "date": "2024-03-01",
            "list": [
                {
                    "time": "11:00",
                    "flight": [{"no": "FB 205"}, {"no": "XX 9205"}],
                    "destination": ["CDG"],
                    "status": "Boarding",
                    "terminal": "1",
                    "aisle": "B",
                    "gate": "12"
                }
            ]
        }"#;

        let day: DaySchedule = serde_json::from_str(json).unwrap();
        assert_eq!(day.date, "2024-03-01");
        assert_eq!(day.legs.len(), 1);

        let leg = &day.legs[0];
        assert_eq!(leg.time, "11:00");
        assert_eq!(leg.flight_numbers.len(), 2);
        assert_eq!(leg.flight_numbers[0].no, "FB 205");
        assert_eq!(leg.destination, ["CDG"]);
        assert_eq!(leg.terminal.as_deref(), Some("1"));
        assert!(leg.stand.is_none());
        assert!(leg.origin.is_empty());
    }

    #[test]
    fn test_day_schedule_tolerates_missing_fields() {
        let day: DaySchedule =
            serde_json::from_str(r#"{"date": "2024-03-01", "list": [{"time": "08:15"}]}"#).unwrap();

        let leg = &day.legs[0];
        assert!(leg.flight_numbers.is_empty());
        assert!(leg.status.is_empty());
        assert!(leg.gate.is_none());
    }
}
