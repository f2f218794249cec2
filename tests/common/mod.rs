//! Shared test fixtures for the stats widget integration tests.
//!
//! Provides a scripted [`FakeApi`], badge helpers, and `capture_errors()`
//! which records ERROR-level `tracing` events emitted inside a closure.

#![allow(dead_code)]

use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;
use video_games_stats::{
    GameRecord, MemoryBadge, Result, Slot, SlotMap, StatsApi, StatsError, StatsQuery,
    StatsSummary,
};

// ---------------------------------------------------------------------------
// FakeApi
// ---------------------------------------------------------------------------

/// Canned answer returned by [`FakeApi`] for every call.
#[derive(Debug, Clone)]
pub enum Reply {
    Summary(StatsSummary),
    Games(Vec<GameRecord>),
    Status(u16),
}

/// In-process [`StatsApi`] that records every query it receives.
pub struct FakeApi {
    reply: Reply,
    calls: Mutex<Vec<(&'static str, StatsQuery)>>,
}

impl FakeApi {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(&'static str, StatsQuery)> {
        self.calls.lock().unwrap().clone()
    }
}

impl StatsApi for FakeApi {
    fn summary(&self, query: &StatsQuery) -> Result<StatsSummary> {
        self.calls.lock().unwrap().push(("summary", query.clone()));
        match &self.reply {
            Reply::Summary(s) => Ok(*s),
            Reply::Status(status) => Err(StatsError::Request {
                endpoint: "video games summary".into(),
                status: *status,
            }),
            Reply::Games(_) => panic!("summary endpoint called on a listing fixture"),
        }
    }

    fn games(&self, query: &StatsQuery) -> Result<Vec<GameRecord>> {
        self.calls.lock().unwrap().push(("games", query.clone()));
        match &self.reply {
            Reply::Games(g) => Ok(g.clone()),
            Reply::Status(status) => Err(StatsError::Request {
                endpoint: "video games".into(),
                status: *status,
            }),
            Reply::Summary(_) => panic!("listing endpoint called on a summary fixture"),
        }
    }
}

// ---------------------------------------------------------------------------
// Badges
// ---------------------------------------------------------------------------

/// Three placeholder badges, in slot order, and the map wiring them up.
pub fn badges() -> ([MemoryBadge; 3], SlotMap) {
    let handles = [
        MemoryBadge::with_text("-"),
        MemoryBadge::with_text("-"),
        MemoryBadge::with_text("-"),
    ];
    let mut slots = SlotMap::new();
    for (slot, badge) in Slot::ALL.into_iter().zip(handles.iter()) {
        slots.insert(slot, badge.clone());
    }
    (handles, slots)
}

pub fn texts(handles: &[MemoryBadge]) -> Vec<String> {
    handles
        .iter()
        .map(|b| b.text().unwrap_or_default())
        .collect()
}

/// The three-record listing used throughout the tests:
/// one without a resell price, one profitable, one overpriced.
pub fn sample_games() -> Vec<GameRecord> {
    serde_json::from_value(sample_games_json()).unwrap()
}

pub fn sample_games_json() -> serde_json::Value {
    serde_json::json!([
        {"resellPrice": null},
        {"resellPrice": {"cash": 50}, "listingDetails": {"price": 40}},
        {"resellPrice": {"cash": 50}, "listingDetails": {"price": 60}}
    ])
}

// ---------------------------------------------------------------------------
// Error capture
// ---------------------------------------------------------------------------

struct ErrorCapture(Arc<Mutex<Vec<String>>>);

struct FieldsVisitor(String);

impl Visit for FieldsVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let _ = write!(self.0, "{}={:?} ", field.name(), value);
    }
}

impl<S: Subscriber> Layer<S> for ErrorCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            let mut visitor = FieldsVisitor(String::new());
            event.record(&mut visitor);
            self.0.lock().unwrap().push(visitor.0);
        }
    }
}

/// Run `f` with a thread-local subscriber and return the ERROR events it
/// emitted, each rendered as `field=value` pairs.
pub fn capture_errors<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(ErrorCapture(events.clone()));
    let out = tracing::subscriber::with_default(subscriber, f);
    let errors = events.lock().unwrap().clone();
    (out, errors)
}
