use indexmap::IndexSet;

use crate::timeline::model::{Entry, Frame};

/// Set of active categories, seeded once per load then mutated only by
/// explicit toggles.
///
/// Seeding happens the first time a non-empty frame is observed while the
/// latch is unarmed, and exactly once: a user who deselects every country is
/// not silently re-seeded on the next tick. `reset` re-arms the latch for a
/// fresh dataset.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    active: IndexSet<String>,
    seeded: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from the first non-empty frame seen, once.
    pub fn observe(&mut self, frame: &Frame) {
        if self.seeded || frame.is_empty() {
            return;
        }
        for entry in &frame.entries {
            self.active.insert(entry.country.clone());
        }
        self.seeded = true;
        tracing::debug!(seeded = self.active.len(), "selection seeded");
    }

    /// Flip membership. Returns whether the country is active afterwards.
    ///
    /// Toggling a country absent from the current frame still lands in the
    /// set and applies to future frames where it appears.
    pub fn toggle(&mut self, country: &str) -> bool {
        if self.active.shift_remove(country) {
            false
        } else {
            self.active.insert(country.to_string());
            true
        }
    }

    pub fn is_active(&self, country: &str) -> bool {
        self.active.contains(country)
    }

    /// Entries of `frame` whose country is active, in frame order.
    pub fn apply<'a>(&self, frame: &'a Frame) -> Vec<&'a Entry> {
        frame
            .entries
            .iter()
            .filter(|e| self.active.contains(&e.country))
            .collect()
    }

    /// Clear the set and re-arm the seed latch. Used on dataset replacement.
    pub fn reset(&mut self) {
        self.active.clear();
        self.seeded = false;
    }

    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/selection/filter.rs"]
mod tests;
