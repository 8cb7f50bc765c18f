//! Airport code lookup.
//!
//! An in-memory directory mapping IATA codes to descriptive airport
//! records, loaded fresh from the directory source every board cycle.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Descriptive record for one airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportRecord {
    /// Three-letter IATA airport identifier, the join key against legs.
    pub iata_code: String,

    /// The municipality the airport serves.
    pub municipality: String,

    /// The airport's full name.
    pub name: String,
}

/// Exact-match lookup from IATA code to [`AirportRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IataDirectory {
    records: HashMap<String, AirportRecord>,
}

impl IataDirectory {
    /// Build a directory from a freshly fetched record set.
    ///
    /// Later records win on duplicate codes.
    #[must_use]
    pub fn new(records: Vec<AirportRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.iata_code.clone(), record))
            .collect();
        Self { records }
    }

    /// Exact-match lookup by IATA code.
    #[must_use]
    pub fn resolve(&self, code: &str) -> Option<&AirportRecord> {
        self.records.get(code)
    }

    /// Render a code list as a human-readable location label.
    ///
    /// Resolved codes render as `"{municipality} ({name})"`; unresolved
    /// codes fall back to the raw code string. Results are joined with
    /// `", "` preserving input order. An empty code list yields `""`.
    #[must_use]
    pub fn describe(&self, codes: &[String]) -> String {
        codes
            .iter()
            .map(|code| match self.resolve(code) {
                Some(airport) => format!("{} ({})", airport.municipality, airport.name),
                None => code.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Number of airports in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the directory holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
