//! Video game stats widget.
//!
//! Fetches aggregate statistics about tracked video games from the backend API
//! and renders three counters into display badges: total games, games without
//! a known resell price, and games listed below their resell value.
//!
//! # Quick start
//!
//! ```no_run
//! use video_games_stats::{MemoryBadge, Slot, SlotMap, StatsWidget};
//!
//! let total = MemoryBadge::new();
//! let slots = SlotMap::new()
//!     .with(Slot::Total, total.clone())
//!     .with(Slot::Unrecognized, MemoryBadge::new())
//!     .with(Slot::Profitable, MemoryBadge::new());
//!
//! let mut widget = StatsWidget::builder()
//!     .base_url("http://localhost:3000")
//!     .slots(slots)
//!     .build()
//!     .unwrap();
//!
//! widget.load();
//! println!("total: {:?}", total.text());
//! ```

pub mod aggregate;
#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod query;

#[cfg(feature = "async")]
pub use async_client::AsyncStatsWidget;
pub use client::{HttpStatsApi, StatsApi};
pub use display::{Badge, MemoryBadge, Slot, SlotMap};
pub use error::{Result, StatsError};
pub use models::{GameRecord, StatsSummary};
pub use query::StatsQuery;

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use tracing::{error, info, warn};

// ---------------------------------------------------------------------------
// Source / WidgetState
// ---------------------------------------------------------------------------

/// Which endpoint the widget reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    /// Server-aggregated counts from `/api/video-games/summary`.
    #[default]
    Summary,
    /// Raw records from `/api/video-games`, tallied client-side.
    Listing { limit: u32 },
}

/// Lifecycle of one widget load. `Rendered` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetState {
    Pending,
    Rendered(StatsSummary),
    Failed(String),
}

impl WidgetState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, WidgetState::Pending)
    }
}

// ---------------------------------------------------------------------------
// StatsWidgetBuilder
// ---------------------------------------------------------------------------

/// Builder for a [`StatsWidget`] talking to the real HTTP API.
///
/// Use [`StatsWidget::builder()`] to obtain one.
pub struct StatsWidgetBuilder {
    base_url: String,
    source: Source,
    timeout: Option<Duration>,
    slots: SlotMap,
}

impl Default for StatsWidgetBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            source: Source::Summary,
            timeout: None,
            slots: SlotMap::new(),
        }
    }
}

impl StatsWidgetBuilder {
    /// Root URL of the API, e.g. `http://localhost:3000`.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Read pre-aggregated counts from the summary endpoint (the default).
    pub fn summary(mut self) -> Self {
        self.source = Source::Summary;
        self
    }

    /// Read raw records from the listing endpoint and count them locally.
    pub fn listing(mut self, limit: u32) -> Self {
        self.source = Source::Listing { limit };
        self
    }

    pub fn source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    /// Set an HTTP request timeout.
    ///
    /// There is none by default: an unanswered request leaves the widget
    /// pending.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn slots(mut self, slots: SlotMap) -> Self {
        self.slots = slots;
        self
    }

    pub fn build(self) -> Result<StatsWidget<HttpStatsApi>> {
        if let Source::Listing { limit: 0 } = self.source {
            return Err(StatsError::InvalidArgument(
                "listing limit must be greater than zero".into(),
            ));
        }
        let api = HttpStatsApi::new(&self.base_url, self.timeout)?;
        Ok(StatsWidget::new(api, self.slots).with_source(self.source))
    }
}

// ---------------------------------------------------------------------------
// StatsWidget
// ---------------------------------------------------------------------------

/// Fetches game statistics once and projects them onto three badges.
///
/// One widget corresponds to one page load: [`load()`](Self::load) performs
/// the fetch-and-render cycle and settles the widget. Any failure is logged
/// and leaves the badges as they were.
pub struct StatsWidget<A = HttpStatsApi> {
    api: A,
    slots: SlotMap,
    source: Source,
    state: WidgetState,
}

impl StatsWidget<HttpStatsApi> {
    pub fn builder() -> StatsWidgetBuilder {
        StatsWidgetBuilder::default()
    }
}

impl<A: StatsApi> StatsWidget<A> {
    /// Create a pending widget reading the summary endpoint through `api`.
    pub fn new(api: A, slots: SlotMap) -> Self {
        Self {
            api,
            slots,
            source: Source::Summary,
            state: WidgetState::Pending,
        }
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the counts for the UTC day of `now` without rendering them.
    pub fn fetch_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<StatsSummary> {
        match self.source {
            Source::Summary => self.api.summary(&StatsQuery::summary(now)),
            Source::Listing { limit } => {
                let games = self.api.games(&StatsQuery::listing(now, limit)?)?;
                Ok(aggregate::summarize(&games))
            }
        }
    }

    /// Fetch and render, returning the outcome instead of logging it.
    ///
    /// Does not change [`state()`](Self::state).
    pub fn refresh_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Result<StatsSummary> {
        let summary = self.fetch_at(now)?;
        self.slots.render(&summary)?;
        Ok(summary)
    }

    pub fn refresh(&mut self) -> Result<StatsSummary> {
        self.refresh_at(&Utc::now())
    }

    /// Run the fetch-and-render cycle as of `now` and settle the widget.
    ///
    /// A settled widget is returned as is; no second request is made.
    pub fn load_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> &WidgetState {
        if self.state.is_settled() {
            warn!(state = ?self.state, "stats widget already settled; skipping load");
            return &self.state;
        }

        self.state = match self.refresh_at(now) {
            Ok(summary) => {
                info!(
                    total = summary.total,
                    unrecognized = summary.unrecognized.total,
                    profitable = summary.profitable.total,
                    "rendered video game stats"
                );
                WidgetState::Rendered(summary)
            }
            Err(e) => {
                error!(error = %e, "failed to load video game stats");
                WidgetState::Failed(e.to_string())
            }
        };
        &self.state
    }

    /// [`load_at`](Self::load_at) with the current time.
    pub fn load(&mut self) -> &WidgetState {
        self.load_at(&Utc::now())
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl<A> fmt::Display for StatsWidget<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.state {
            WidgetState::Pending => "pending".to_string(),
            WidgetState::Rendered(s) => format!(
                "rendered {}/{}/{}",
                s.total, s.unrecognized.total, s.profitable.total
            ),
            WidgetState::Failed(msg) => format!("failed: {}", msg),
        };
        write!(f, "StatsWidget(source={:?}, state={})", self.source, state)
    }
}
