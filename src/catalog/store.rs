//! Record store.
//!
//! Holds the full, unfiltered record collection and the generation counter
//! that lets downstream views detect a replaced collection.

use crate::catalog::models::{CostRange, Record};

/// Full record collection, read-only for everything but the owner.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    generation: u64,
}

impl RecordStore {
    /// Create a store holding the given records.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            generation: 1,
        }
    }

    /// Replace the whole collection.
    ///
    /// # Details
    /// Bumps the generation even when the new collection is equal to the old
    /// one, so every refresh is seen as a data change.
    pub fn replace(&mut self, records: Vec<Record>) {
        self.records = records;
        self.generation += 1;
    }

    /// All records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Monotonic counter bumped on every `replace`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Global cost bounds over all records.
    ///
    /// # Returns
    /// * `CostRange` - `(min cost, max cost)`, or `(0, 0)` when empty
    pub fn cost_bounds(&self) -> CostRange {
        let min = self.records.iter().map(|r| r.cost).min();
        let max = self.records.iter().map(|r| r.cost).max();
        match (min, max) {
            (Some(min), Some(max)) => CostRange::new(min, max),
            _ => CostRange::default(),
        }
    }

    /// Distinct values of one text field, in first-seen order.
    ///
    /// # Arguments
    /// * `field` - Accessor for the field
    pub fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&Record) -> &str,
    {
        let mut seen: Vec<String> = Vec::new();
        for record in &self.records {
            let value = field(record);
            if !seen.iter().any(|v| v == value) {
                seen.push(value.to_string());
            }
        }
        seen
    }
}
