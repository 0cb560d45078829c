//! Undo/redo over furniture snapshots
//!
//! `past` always ends with the current arrangement; `future` holds undone
//! snapshots, nearest first.

use std::collections::VecDeque;

use shared::FurnitureItem;

/// A deep copy of the furniture collection
pub type Snapshot = Vec<FurnitureItem>;

/// Linear history over furniture snapshots
#[derive(Debug, Clone)]
pub struct HistoryEngine {
    past: Vec<Snapshot>,
    future: VecDeque<Snapshot>,
    /// Maximum retained `past` entries, 0 = unbounded
    limit: usize,
}

impl Default for HistoryEngine {
    fn default() -> Self {
        Self::with_limit(0)
    }
}

impl HistoryEngine {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            past: Vec::new(),
            future: VecDeque::new(),
            limit,
        }
    }

    /// Record `furniture` unless it equals the latest snapshot.
    /// A new entry discards the redo branch. Returns true when recorded.
    pub fn save_state(&mut self, furniture: &[FurnitureItem]) -> bool {
        if self.past.last().is_some_and(|top| top.as_slice() == furniture) {
            return false;
        }
        self.past.push(furniture.to_vec());
        self.future.clear();
        if self.limit > 0 && self.past.len() > self.limit {
            let overflow = self.past.len() - self.limit;
            self.past.drain(..overflow);
        }
        tracing::debug!(past = self.past.len(), "history snapshot recorded");
        true
    }

    /// Step back. Returns the arrangement to apply, or `None` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.past.len() <= 1 {
            return None;
        }
        let current = self.past.pop()?;
        self.future.push_front(current);
        tracing::debug!(past = self.past.len(), future = self.future.len(), "undo");
        self.past.last().cloned()
    }

    /// Step forward. Returns the arrangement to apply, or `None` when the
    /// redo branch is empty.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let next = self.future.pop_front()?;
        self.past.push(next.clone());
        tracing::debug!(past = self.past.len(), future = self.future.len(), "redo");
        Some(next)
    }

    /// Change the retention limit, trimming the oldest entries if needed
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        if limit > 0 && self.past.len() > limit {
            let overflow = self.past.len() - limit;
            self.past.drain(..overflow);
        }
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Drop everything and start over from `furniture`
    pub fn reset(&mut self, furniture: &[FurnitureItem]) {
        self.clear();
        self.past.push(furniture.to_vec());
    }

    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Latest recorded snapshot
    pub fn current(&self) -> Option<&Snapshot> {
        self.past.last()
    }
}
