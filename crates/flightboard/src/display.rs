//! Render-ready card formatting.
//!
//! Maps a scheduled flight into the exact field set a renderer needs. The
//! direction is resolved into a field table once; the formatter never
//! re-branches on arrival/departure at individual access sites.

use chrono::NaiveDate;
use serde::Serialize;

use crate::directory::IataDirectory;
use crate::schedule::{Direction, FlightLeg, ScheduledFlight};

/// A labeled accessor for one direction-specific leg field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Display label, e.g. "Gate".
    pub label: &'static str,

    /// Reads the field's value off a leg.
    pub value: fn(&FlightLeg) -> Option<&str>,
}

fn leg_stand(leg: &FlightLeg) -> Option<&str> {
    leg.stand.as_deref()
}

fn leg_hall(leg: &FlightLeg) -> Option<&str> {
    leg.hall.as_deref()
}

fn leg_baggage(leg: &FlightLeg) -> Option<&str> {
    leg.baggage.as_deref()
}

fn leg_terminal(leg: &FlightLeg) -> Option<&str> {
    leg.terminal.as_deref()
}

fn leg_aisle(leg: &FlightLeg) -> Option<&str> {
    leg.aisle.as_deref()
}

fn leg_gate(leg: &FlightLeg) -> Option<&str> {
    leg.gate.as_deref()
}

const ARRIVAL_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        label: "Parking Stand",
        value: leg_stand,
    },
    FieldSpec {
        label: "Hall",
        value: leg_hall,
    },
    FieldSpec {
        label: "Belt",
        value: leg_baggage,
    },
];

const DEPARTURE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        label: "Terminal",
        value: leg_terminal,
    },
    FieldSpec {
        label: "Aisle",
        value: leg_aisle,
    },
    FieldSpec {
        label: "Gate",
        value: leg_gate,
    },
];

impl Direction {
    /// Heading for the card's location line.
    #[must_use]
    pub fn location_heading(self) -> &'static str {
        match self {
            Self::Arrival => "Origin (Airport)",
            Self::Departure => "Destination (Airport)",
        }
    }

    /// The secondary field table for this direction. Arrivals carry
    /// Parking Stand / Hall / Belt; departures carry Terminal / Aisle /
    /// Gate, a different field set rather than relabeled fields.
    #[must_use]
    pub fn field_table(self) -> &'static [FieldSpec] {
        match self {
            Self::Arrival => ARRIVAL_FIELDS,
            Self::Departure => DEPARTURE_FIELDS,
        }
    }
}

/// One render-ready flight card.
///
/// Output-only: recomputed every cycle, consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayCard {
    /// Human-readable location line (see [`IataDirectory::describe`]);
    /// "N/A" when the leg carries no location codes.
    pub location_label: String,

    /// All flight numbers joined with ", "; "N/A" when there are none.
    pub flight_numbers: String,

    /// Bare "HH:MM" for flights on `today`, otherwise "HH:MM (YYYY-MM-DD)"
    /// so a flight already known to be on a later date shows its date.
    pub scheduled_time_label: String,

    /// Ordered (label, value) pairs from the direction's field table.
    /// Missing leg sub-fields render as empty strings.
    pub secondary_fields: Vec<(&'static str, String)>,

    /// Operational status, verbatim from the leg.
    pub status: String,
}

/// Format one scheduled flight into a display card.
///
/// `today` is the calendar date at format time, injected by the caller so
/// formatting stays pure. Formatting the same flight twice yields an
/// identical card.
#[must_use]
pub fn format(
    flight: &ScheduledFlight,
    direction: Direction,
    directory: &IataDirectory,
    today: NaiveDate,
) -> DisplayCard {
    let location = directory.describe(direction.location_codes(&flight.leg));
    let location_label = if location.is_empty() {
        "N/A".to_string()
    } else {
        location
    };

    let flight_numbers = flight
        .leg
        .flight_numbers
        .iter()
        .map(|number| number.no.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let flight_numbers = if flight_numbers.is_empty() {
        "N/A".to_string()
    } else {
        flight_numbers
    };

    let scheduled_time_label = if flight.timestamp.date() == today {
        flight.leg.time.clone()
    } else {
        format!("{} ({})", flight.leg.time, flight.date)
    };

    let secondary_fields = direction
        .field_table()
        .iter()
        .map(|field| {
            let value = (field.value)(&flight.leg).unwrap_or_default();
            (field.label, value.to_string())
        })
        .collect();

    DisplayCard {
        location_label,
        flight_numbers,
        scheduled_time_label,
        secondary_fields,
        status: flight.leg.status.clone(),
    }
}
