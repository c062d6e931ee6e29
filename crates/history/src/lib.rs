//! Recent valuation history.
//!
//! Provides the `HistoryStore` trait and a bounded in-memory implementation.
//! Entries are kept most-recent-first; once the store is full the oldest
//! entry is dropped.

use std::collections::VecDeque;

use carworth_model::{FuelType, State, Verdict};
use carworth_valuation::Valuation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of entries kept.
pub const DEFAULT_CAPACITY: usize = 10;

/// Summary of one valuation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub year: i32,
    pub fuel: FuelType,
    pub state: State,
    pub ex_showroom: f64,
    pub asking_price: f64,
    pub km: u32,
    pub fair_value: f64,
    pub verdict: Verdict,
}

impl HistoryEntry {
    /// Summarize a valuation, stamped with the current time.
    pub fn from_valuation(valuation: &Valuation) -> Self {
        Self::at(valuation, Utc::now())
    }

    pub fn at(valuation: &Valuation, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            year: valuation.profile.year,
            fuel: valuation.profile.fuel_type,
            state: valuation.profile.state,
            ex_showroom: valuation.prices.ex_showroom,
            asking_price: valuation.prices.asking_price,
            km: valuation.profile.km,
            fair_value: valuation.fair_value(),
            verdict: valuation.verdict.verdict,
        }
    }
}

/// Trait for history stores.
pub trait HistoryStore {
    /// Add an entry at the front.
    fn record(&mut self, entry: HistoryEntry);

    /// Entries, most recent first.
    fn entries(&self) -> Vec<HistoryEntry>;

    fn clear(&mut self);

    /// Store name for logging.
    fn name(&self) -> &'static str;
}

/// Bounded history held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl InMemoryHistory {
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl HistoryStore for InMemoryHistory {
    fn record(&mut self, entry: HistoryEntry) {
        tracing::debug!(
            store = self.name(),
            state = entry.state.label(),
            verdict = entry.verdict.label(),
            "Recording valuation"
        );
        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}
