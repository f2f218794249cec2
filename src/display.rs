//! Display slots the widget renders counts into.
//!
//! A [`SlotMap`] names each badge by what it shows instead of by its
//! position in the page. [`SlotMap::from_document_order`] keeps the older
//! positional contract for callers that only have an ordered badge list.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::error::{Result, StatsError};
use crate::models::StatsSummary;

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Total,
    Unrecognized,
    Profitable,
}

impl Slot {
    /// All slots in document order.
    pub const ALL: [Slot; 3] = [Slot::Total, Slot::Unrecognized, Slot::Profitable];

    pub fn count(self, summary: &StatsSummary) -> u64 {
        match self {
            Slot::Total => summary.total,
            Slot::Unrecognized => summary.unrecognized.total,
            Slot::Profitable => summary.profitable.total,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::Total => "total",
            Slot::Unrecognized => "without resell price",
            Slot::Profitable => "with good price",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Badge
// ---------------------------------------------------------------------------

/// A writable element showing a single count.
pub trait Badge: Send {
    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);
}

/// In-memory badge. Clones share the same content, so a caller can keep a
/// handle and read what the widget wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryBadge {
    text: Arc<Mutex<Option<String>>>,
}

impl MemoryBadge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Badge pre-filled with placeholder markup.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Arc::new(Mutex::new(Some(text.to_string()))),
        }
    }

    /// Current content, or `None` if nothing was ever written.
    pub fn text(&self) -> Option<String> {
        self.text
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Badge for MemoryBadge {
    fn set_text(&mut self, text: &str) {
        *self
            .text
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(text.to_string());
    }
}

// ---------------------------------------------------------------------------
// SlotMap
// ---------------------------------------------------------------------------

/// Mapping from [`Slot`] to the badge that displays it.
#[derive(Default)]
pub struct SlotMap {
    container: Option<String>,
    badges: HashMap<Slot, Box<dyn Badge>>,
}

impl SlotMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `badge` to `slot`, replacing any previous one.
    pub fn with<B: Badge + 'static>(mut self, slot: Slot, badge: B) -> Self {
        self.insert(slot, badge);
        self
    }

    pub fn insert<B: Badge + 'static>(&mut self, slot: Slot, badge: B) {
        self.badges.insert(slot, Box::new(badge));
    }

    /// Map the badges of `container` by document order: the first three go to
    /// total, unrecognized and profitable. Extra badges are left alone.
    pub fn from_document_order(container: &str, badges: Vec<Box<dyn Badge>>) -> Result<Self> {
        if badges.len() < Slot::ALL.len() {
            return Err(StatsError::Render(format!(
                "container #{} has {} badges, expected {}",
                container,
                badges.len(),
                Slot::ALL.len()
            )));
        }
        let badges = Slot::ALL.into_iter().zip(badges).collect();
        Ok(Self {
            container: Some(container.to_string()),
            badges,
        })
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.badges.contains_key(&slot)
    }

    fn missing(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|s| !self.contains(*s))
            .collect()
    }

    /// Write every count of `summary` into its badge.
    ///
    /// Nothing is written unless all three slots are present.
    pub fn render(&mut self, summary: &StatsSummary) -> Result<()> {
        let missing = self.missing();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|s| s.label()).collect();
            let scope = match &self.container {
                Some(id) => format!(" in container #{}", id),
                None => String::new(),
            };
            return Err(StatsError::Render(format!(
                "missing display slot(s){}: {}",
                scope,
                names.join(", ")
            )));
        }

        for slot in Slot::ALL {
            if let Some(badge) = self.badges.get_mut(&slot) {
                badge.set_text(&slot.count(summary).to_string());
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SlotMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<Slot> = Slot::ALL
            .into_iter()
            .filter(|s| self.contains(*s))
            .collect();
        f.debug_struct("SlotMap")
            .field("container", &self.container)
            .field("slots", &slots)
            .finish()
    }
}
