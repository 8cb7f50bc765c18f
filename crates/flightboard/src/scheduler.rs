//! Upcoming-flight selection.
//!
//! Normalizes day schedules into comparable timestamps, keeps the flights
//! that are still ahead of the clock, orders them chronologically, and
//! truncates to the board size.

use chrono::{NaiveDateTime, Timelike};
use tracing::debug;

use crate::schedule::{DaySchedule, ScheduledFlight};

/// Whether a scheduled timestamp should appear on the board.
///
/// With a custom search active every flight is upcoming regardless of its
/// timestamp: search results cover the full window of available data,
/// while the default board only shows what is still ahead. The cutoff
/// uses minute precision, matching the HH:MM resolution of the data.
#[must_use]
pub fn is_upcoming(
    scheduled: NaiveDateTime,
    now: NaiveDateTime,
    custom_search_active: bool,
) -> bool {
    custom_search_active || scheduled >= truncate_to_minute(now)
}

/// Select the next `limit` flights across all days.
///
/// Flattens every (date, leg) pair into a [`ScheduledFlight`], keeps those
/// passing [`is_upcoming`], sorts ascending by (date, time) using
/// lexicographic string comparison (both are zero-padded ISO-like strings,
/// so string order equals chronological order), and truncates. The sort is
/// stable: flights sharing a timestamp keep their input order. Fewer than
/// `limit` qualifying flights is not an error; legs whose date or time do
/// not parse are skipped.
#[must_use]
pub fn select_top_n(
    schedules: &[DaySchedule],
    now: NaiveDateTime,
    custom_search_active: bool,
    limit: usize,
) -> Vec<ScheduledFlight> {
    let mut upcoming: Vec<ScheduledFlight> = schedules
        .iter()
        .flat_map(|day| {
            day.legs
                .iter()
                .filter_map(move |leg| match ScheduledFlight::combine(&day.date, leg) {
                    Ok(flight) => Some(flight),
                    Err(err) => {
                        debug!(%err, "skipping leg with unparseable schedule");
                        None
                    }
                })
        })
        .filter(|flight| is_upcoming(flight.timestamp, now, custom_search_active))
        .collect();

    upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.leg.time.cmp(&b.leg.time)));
    upcoming.truncate(limit);
    upcoming
}

fn truncate_to_minute(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{FlightLeg, FlightNumber};
    use chrono::NaiveDate;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(
                time[..2].parse().unwrap(),
                time[3..].parse().unwrap(),
                0,
            )
            .unwrap()
    }

    fn leg(no: &str, time: &str) -> FlightLeg {
        FlightLeg {
            time: time.to_string(),
            flight_numbers: vec![FlightNumber { no: no.to_string() }],
            origin: Vec::new(),
            destination: vec!["CDG".to_string()],
            status: String::new(),
            stand: None,
            hall: None,
            baggage: None,
            terminal: None,
            aisle: None,
            gate: None,
        }
    }

    fn day(date: &str, legs: Vec<FlightLeg>) -> DaySchedule {
        DaySchedule {
            date: date.to_string(),
            legs,
        }
    }

    #[test]
    fn test_is_upcoming_at_or_after_now() {
        let now = at("2024-03-01", "10:00");
        assert!(is_upcoming(at("2024-03-01", "10:00"), now, false));
        assert!(is_upcoming(at("2024-03-01", "10:01"), now, false));
        assert!(!is_upcoming(at("2024-03-01", "09:59"), now, false));
    }

    #[test]
    fn test_is_upcoming_search_overrides_time() {
        let now = at("2024-03-01", "10:00");
        assert!(is_upcoming(at("2020-01-01", "00:00"), now, true));
    }

    #[test]
    fn test_is_upcoming_ignores_seconds_in_now() {
        // 09:59:45 truncates to 09:59, so a 09:59 flight still counts.
        let now = at("2024-03-01", "09:59").with_second(45).unwrap();
        assert!(is_upcoming(at("2024-03-01", "09:59"), now, false));
    }

    #[test]
    fn test_select_top_n_drops_past_flights() {
        let schedules = vec![day("2024-03-01", vec![leg("FB 1", "09:00"), leg("FB 2", "11:00")])];
        let now = at("2024-03-01", "10:00");

        let selected = select_top_n(&schedules, now, false, 10);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].leg.time, "11:00");
    }

    #[test]
    fn test_select_top_n_search_keeps_past_flights() {
        let schedules = vec![day("2024-03-01", vec![leg("FB 1", "09:00"), leg("FB 2", "11:00")])];
        let now = at("2024-03-01", "10:00");

        let selected = select_top_n(&schedules, now, true, 10);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_select_top_n_truncates_to_limit() {
        let legs: Vec<FlightLeg> = (0..15).map(|i| leg(&format!("FB {i}"), &format!("{:02}:30", 8 + i))).collect();
        let schedules = vec![day("2024-03-01", legs)];
        let now = at("2024-03-01", "00:00");

        let selected = select_top_n(&schedules, now, false, 10);
        assert_eq!(selected.len(), 10);
        assert_eq!(selected[0].leg.time, "08:30");
        assert_eq!(selected[9].leg.time, "17:30");
    }

    #[test]
    fn test_select_top_n_sorts_across_days() {
        let schedules = vec![
            day("2024-03-02", vec![leg("FB 2", "08:00")]),
            day("2024-03-01", vec![leg("FB 1", "23:00")]),
        ];
        let now = at("2024-03-01", "00:00");

        let selected = select_top_n(&schedules, now, false, 10);
        assert_eq!(selected[0].date, "2024-03-01");
        assert_eq!(selected[1].date, "2024-03-02");
    }

    #[test]
    fn test_select_top_n_tie_keeps_input_order() {
        let schedules = vec![day(
            "2024-03-01",
            vec![leg("FB 1", "12:00"), leg("FB 2", "12:00")],
        )];
        let now = at("2024-03-01", "00:00");

        let selected = select_top_n(&schedules, now, false, 10);
        assert_eq!(selected[0].leg.flight_numbers[0].no, "FB 1");
        assert_eq!(selected[1].leg.flight_numbers[0].no, "FB 2");
    }

    #[test]
    fn test_select_top_n_skips_unparseable_legs() {
        let schedules = vec![day(
            "2024-03-01",
            vec![leg("FB 1", "late"), leg("FB 2", "12:00")],
        )];
        let now = at("2024-03-01", "00:00");

        let selected = select_top_n(&schedules, now, false, 10);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].leg.time, "12:00");
    }

    #[test]
    fn test_select_top_n_fewer_than_limit() {
        let schedules = vec![day("2024-03-01", vec![leg("FB 1", "12:00")])];
        let now = at("2024-03-01", "00:00");

        let selected = select_top_n(&schedules, now, false, 10);
        assert_eq!(selected.len(), 1);
    }
}
