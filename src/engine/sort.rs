//! Sort selector.

use serde::{Deserialize, Serialize};

/// Ordering applied to filtered records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Keep record store order
    #[default]
    None,
    /// Cheapest first
    CostAscending,
    /// Most expensive first
    CostDescending,
    /// Earliest deadline first
    DeadlineAscending,
}

impl SortKey {
    /// Display name for the status bar and sort panel.
    pub fn name(&self) -> &'static str {
        match self {
            SortKey::None => "None",
            SortKey::CostAscending => "Lowest Price",
            SortKey::CostDescending => "Highest Price",
            SortKey::DeadlineAscending => "Deadline",
        }
    }

    /// Key that follows this one when cycling.
    ///
    /// # Details
    /// Cycles None -> CostAscending -> CostDescending -> DeadlineAscending -> None.
    pub fn next(&self) -> SortKey {
        match self {
            SortKey::None => SortKey::CostAscending,
            SortKey::CostAscending => SortKey::CostDescending,
            SortKey::CostDescending => SortKey::DeadlineAscending,
            SortKey::DeadlineAscending => SortKey::None,
        }
    }
}

/// Holds the current sort key.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortSelector {
    key: SortKey,
}

impl SortSelector {
    /// Create a selector starting at `key`.
    pub fn new(key: SortKey) -> Self {
        Self { key }
    }

    /// Current key.
    pub fn key(&self) -> SortKey {
        self.key
    }

    /// Select a key.
    ///
    /// # Returns
    /// * `bool` - True if the key changed
    pub fn set(&mut self, key: SortKey) -> bool {
        if self.key == key {
            return false;
        }
        tracing::debug!(sort = key.name(), "sort key set");
        self.key = key;
        true
    }

    /// Drop any ordering.
    pub fn clear(&mut self) -> bool {
        self.set(SortKey::None)
    }
}
