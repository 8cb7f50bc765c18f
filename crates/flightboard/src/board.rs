//! Board engine.
//!
//! Orchestrates one board cycle: fetch the flight schedules and the
//! airport directory concurrently, narrow by search term, select the next
//! upcoming flights, and format them into render-ready cards. The engine
//! holds no UI state; callers inject the clock and consume the snapshot.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::directory::IataDirectory;
use crate::display::{self, DisplayCard};
use crate::error::Result;
use crate::filter::FlightFilter;
use crate::schedule::Direction;
use crate::scheduler;
use crate::source::{AirportDirectorySource, FlightDataSource, ScheduleQuery};

/// Engine knobs carried over from [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSettings {
    /// How many flights a view shows.
    pub limit: usize,

    /// Language code sent to the flight data source.
    pub lang: String,

    /// Whether queries include cargo flights.
    pub include_cargo: bool,
}

impl From<&Config> for BoardSettings {
    fn from(config: &Config) -> Self {
        Self {
            limit: config.board.limit,
            lang: config.sources.lang.clone(),
            include_cargo: config.sources.include_cargo,
        }
    }
}

/// One completed board view, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// The direction this view covers.
    pub direction: Direction,

    /// The active search term, if this view came from a search.
    pub search_term: Option<String>,

    /// Ordered cards, at most the configured limit.
    pub cards: Vec<DisplayCard>,
}

/// Outcome of one board cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardOutcome {
    /// The cycle completed and produced a fresh view.
    Rendered(BoardSnapshot),

    /// A newer action started while this cycle was in flight; its result
    /// was discarded so stale data never replaces a newer view.
    Superseded,
}

/// Drives board cycles against a pair of data sources.
#[derive(Debug)]
pub struct BoardEngine<F, D> {
    flights: F,
    directory: D,
    settings: BoardSettings,
    generation: AtomicU64,
}

impl<F, D> BoardEngine<F, D>
where
    F: FlightDataSource,
    D: AirportDirectorySource,
{
    /// Create an engine over the given sources.
    #[must_use]
    pub fn new(flights: F, directory: D, settings: BoardSettings) -> Self {
        Self {
            flights,
            directory,
            settings,
            generation: AtomicU64::new(0),
        }
    }

    /// Load the default view: the next upcoming flights in `direction`.
    ///
    /// # Errors
    ///
    /// Returns a fetch error if either data source fails; the whole cycle
    /// aborts and nothing renders partially.
    pub async fn load_default(
        &self,
        direction: Direction,
        now: NaiveDateTime,
    ) -> Result<BoardOutcome> {
        self.refresh(direction, None, now).await
    }

    /// Load a search view: every flight matching `term` in `direction`,
    /// across the full window of available data.
    ///
    /// A blank term behaves like the default view.
    ///
    /// # Errors
    ///
    /// Returns a fetch error if either data source fails.
    pub async fn search(
        &self,
        term: &str,
        direction: Direction,
        now: NaiveDateTime,
    ) -> Result<BoardOutcome> {
        let term = term.trim();
        if term.is_empty() {
            return self.refresh(direction, None, now).await;
        }
        self.refresh(direction, Some(term.to_string()), now).await
    }

    /// Clear any search and reload the default view for `direction`.
    ///
    /// # Errors
    ///
    /// Returns a fetch error if either data source fails.
    pub async fn reset(&self, direction: Direction, now: NaiveDateTime) -> Result<BoardOutcome> {
        self.load_default(direction, now).await
    }

    async fn refresh(
        &self,
        direction: Direction,
        term: Option<String>,
        now: NaiveDateTime,
    ) -> Result<BoardOutcome> {
        // Claim a generation; any later action supersedes this one.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(%direction, search = term.as_deref().unwrap_or(""), "refreshing board");

        let query = ScheduleQuery {
            date: now.format("%Y-%m-%d").to_string(),
            lang: self.settings.lang.clone(),
            cargo: self.settings.include_cargo,
            arrival: direction.is_arrival(),
        };

        // Both sources must land before anything renders.
        let fetched = tokio::try_join!(self.flights.fetch(&query), self.directory.fetch());
        let (schedules, records) = match fetched {
            Ok(pair) => pair,
            Err(err) => {
                error!(%err, "board cycle aborted");
                return Err(err);
            }
        };

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding superseded board cycle");
            return Ok(BoardOutcome::Superseded);
        }

        let directory = IataDirectory::new(records);
        let custom_search_active = term.is_some();

        let filtered;
        let candidates = match &term {
            Some(term) => {
                filtered =
                    FlightFilter::new(&directory).filter_by_term(&schedules, term, direction);
                &filtered
            }
            None => &schedules,
        };

        let upcoming =
            scheduler::select_top_n(candidates, now, custom_search_active, self.settings.limit);
        let today = now.date();
        let cards = upcoming
            .iter()
            .map(|flight| display::format(flight, direction, &directory, today))
            .collect();

        Ok(BoardOutcome::Rendered(BoardSnapshot {
            direction,
            search_term: term,
            cards,
        }))
    }
}
