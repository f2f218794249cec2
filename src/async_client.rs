//! Async wrapper around [`StatsWidget`] for use in async runtimes (Tokio, etc.).
//!
//! The fetch-and-render cycle runs on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], so the caller's task suspends until the
//! response arrives without blocking the event loop.
//!
//! # Example
//!
//! ```no_run
//! use video_games_stats::{AsyncStatsWidget, MemoryBadge, Slot, SlotMap, StatsWidget};
//!
//! #[tokio::main]
//! async fn main() {
//!     let slots = SlotMap::new()
//!         .with(Slot::Total, MemoryBadge::new())
//!         .with(Slot::Unrecognized, MemoryBadge::new())
//!         .with(Slot::Profitable, MemoryBadge::new());
//!     let widget = StatsWidget::builder().slots(slots).build().unwrap();
//!
//!     let state = AsyncStatsWidget::new(widget).load().await.unwrap();
//!     println!("{:?}", state);
//! }
//! ```

use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::client::StatsApi;
use crate::error::{Result, StatsError};
use crate::{StatsSummary, StatsWidget, WidgetState};

/// Async wrapper around [`StatsWidget`].
///
/// The widget is shared behind a [`Mutex`] so it can be moved onto a
/// blocking thread for each call.
pub struct AsyncStatsWidget<A> {
    inner: Arc<Mutex<StatsWidget<A>>>,
}

impl<A> Clone for AsyncStatsWidget<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A> AsyncStatsWidget<A>
where
    A: StatsApi + Send + 'static,
{
    pub fn new(widget: StatsWidget<A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(widget)),
        }
    }

    /// Run a sync widget operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut StatsWidget<A>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let widget = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = widget
                .lock()
                .map_err(|_| StatsError::InvalidArgument("widget lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| StatsError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Load once and return the settled state.
    ///
    /// Widget failures are reported through the state, not the `Result`; an
    /// `Err` here means the background task itself failed.
    pub async fn load(&self) -> Result<WidgetState> {
        self.run(|w| Ok(w.load_at(&Utc::now()).clone())).await
    }

    /// Fetch and render, propagating any error.
    pub async fn refresh(&self) -> Result<StatsSummary> {
        self.run(|w| w.refresh()).await
    }

    pub async fn state(&self) -> Result<WidgetState> {
        self.run(|w| Ok(w.state().clone())).await
    }
}
