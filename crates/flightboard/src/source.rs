//! External data sources.
//!
//! The board pulls from two collaborators every cycle: a flight data
//! source keyed by a [`ScheduleQuery`], and an airport directory source.
//! Both are traits so the engine can be driven by HTTP in production and
//! by fixtures in tests.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::directory::AirportRecord;
use crate::error::{Error, Result};
use crate::schedule::DaySchedule;

/// Source name used in fetch errors for the flight data collaborator.
pub const FLIGHT_SOURCE_NAME: &str = "flight schedule";

/// Source name used in fetch errors for the directory collaborator.
pub const DIRECTORY_SOURCE_NAME: &str = "airport directory";

/// Query parameters for one flight-data fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleQuery {
    /// The day to query, zero-padded "YYYY-MM-DD".
    pub date: String,

    /// Response language code, e.g. "en".
    pub lang: String,

    /// Whether to include cargo flights.
    pub cargo: bool,

    /// Query arrivals instead of departures.
    pub arrival: bool,
}

impl ScheduleQuery {
    /// The query as URL parameter pairs, in wire order.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("date", self.date.clone()),
            ("lang", self.lang.clone()),
            ("cargo", self.cargo.to_string()),
            ("arrival", self.arrival.to_string()),
        ]
    }
}

/// A source of day schedules.
#[async_trait]
pub trait FlightDataSource: Send + Sync {
    /// Fetch the day schedules matching `query`.
    ///
    /// # Errors
    ///
    /// Returns a fetch error if the source is unreachable or its payload
    /// does not decode.
    async fn fetch(&self, query: &ScheduleQuery) -> Result<Vec<DaySchedule>>;
}

/// A source of airport directory records.
///
/// Fetched fresh every cycle; the board never caches it.
#[async_trait]
pub trait AirportDirectorySource: Send + Sync {
    /// Fetch the full airport record set.
    ///
    /// # Errors
    ///
    /// Returns a fetch error if the source is unreachable or its payload
    /// does not decode.
    async fn fetch(&self) -> Result<Vec<AirportRecord>>;
}

/// Build the shared HTTP client for the HTTP-backed sources.
///
/// # Errors
///
/// Returns [`Error::HttpClient`] if the client cannot be constructed.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::HttpClient(Box::new(e)))
}

/// HTTP-backed flight data source.
#[derive(Debug, Clone)]
pub struct HttpFlightSource {
    client: reqwest::Client,
    url: String,
}

impl HttpFlightSource {
    /// Create a source fetching from `url`.
    #[must_use]
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl FlightDataSource for HttpFlightSource {
    async fn fetch(&self, query: &ScheduleQuery) -> Result<Vec<DaySchedule>> {
        debug!(url = %self.url, date = %query.date, arrival = query.arrival, "fetching flight schedules");
        let schedules = self
            .client
            .get(&self.url)
            .query(&query.params())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::fetch(FLIGHT_SOURCE_NAME, e))?
            .json()
            .await
            .map_err(|e| Error::fetch(FLIGHT_SOURCE_NAME, e))?;
        Ok(schedules)
    }
}

/// HTTP-backed airport directory source.
#[derive(Debug, Clone)]
pub struct HttpDirectorySource {
    client: reqwest::Client,
    url: String,
}

impl HttpDirectorySource {
    /// Create a source fetching from `url`.
    #[must_use]
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl AirportDirectorySource for HttpDirectorySource {
    async fn fetch(&self) -> Result<Vec<AirportRecord>> {
        debug!(url = %self.url, "fetching airport directory");
        let records = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Error::fetch(DIRECTORY_SOURCE_NAME, e))?
            .json()
            .await
            .map_err(|e| Error::fetch(DIRECTORY_SOURCE_NAME, e))?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_wire_order() {
        let query = ScheduleQuery {
            date: "2024-03-01".to_string(),
            lang: "en".to_string(),
            cargo: false,
            arrival: true,
        };

        assert_eq!(
            query.params(),
            vec![
                ("date", "2024-03-01".to_string()),
                ("lang", "en".to_string()),
                ("cargo", "false".to_string()),
                ("arrival", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_http_client_builds() {
        assert!(http_client(Duration::from_secs(30)).is_ok());
    }
}
