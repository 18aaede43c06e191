//! View engine.
//!
//! Derives the ordered, filtered record list from the record store, a filter
//! snapshot and a sort key. `derive_view` is pure; `ViewEngine` only caches the
//! last result so an unchanged snapshot is not recomputed.

use crate::catalog::{Record, RecordStore};
use crate::engine::filter::FilterCriteria;
use crate::engine::sort::SortKey;

/// Check a record against every active constraint.
///
/// # Details
/// Text fields require an exact match, except duration which matches by
/// prefix so that "2" selects "2 years". Cost must lie in the inclusive range.
pub fn passes(record: &Record, criteria: &FilterCriteria) -> bool {
    let exact = |wanted: &str, actual: &str| wanted.is_empty() || wanted == actual;

    exact(&criteria.name, &record.name)
        && exact(&criteria.country, &record.country)
        && exact(&criteria.university, &record.university)
        && (criteria.duration.is_empty() || record.duration.starts_with(&criteria.duration))
        && exact(&criteria.language, &record.language)
        && criteria.cost_range.contains(record.cost)
}

/// Filter then order records.
///
/// # Arguments
/// * `records` - Full record set in store order
/// * `criteria` - Filter snapshot
/// * `sort` - Ordering to apply
///
/// # Returns
/// * `Vec<Record>` - Matching records; ties keep store order
pub fn derive_view(records: &[Record], criteria: &FilterCriteria, sort: SortKey) -> Vec<Record> {
    let mut filtered: Vec<Record> = records
        .iter()
        .filter(|record| passes(record, criteria))
        .cloned()
        .collect();

    // `sort_by` is stable, which keeps equal keys in store order.
    match sort {
        SortKey::None => {}
        SortKey::CostAscending => filtered.sort_by(|a, b| a.cost.cmp(&b.cost)),
        SortKey::CostDescending => filtered.sort_by(|a, b| b.cost.cmp(&a.cost)),
        SortKey::DeadlineAscending => filtered.sort_by(|a, b| a.deadline.cmp(&b.deadline)),
    }

    filtered
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    generation: u64,
    criteria: FilterCriteria,
    sort: SortKey,
}

/// Caches the derived view for the last snapshot it saw.
#[derive(Debug, Clone, Default)]
pub struct ViewEngine {
    last: Option<Snapshot>,
    output: Vec<Record>,
}

impl ViewEngine {
    /// Recompute the view if any input differs from the last call.
    ///
    /// # Returns
    /// * `bool` - True if the view was recomputed
    pub fn update(&mut self, store: &RecordStore, criteria: FilterCriteria, sort: SortKey) -> bool {
        let snapshot = Snapshot {
            generation: store.generation(),
            criteria,
            sort,
        };
        if self.last.as_ref() == Some(&snapshot) {
            return false;
        }

        self.output = derive_view(store.records(), &snapshot.criteria, snapshot.sort);
        tracing::debug!(
            matched = self.output.len(),
            total = store.len(),
            sort = sort.name(),
            "view recomputed"
        );
        self.last = Some(snapshot);
        true
    }

    /// The derived records.
    pub fn records(&self) -> &[Record] {
        &self.output
    }

    /// Number of derived records.
    pub fn len(&self) -> usize {
        self.output.len()
    }
}
