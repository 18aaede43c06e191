//! Application record model.
//!
//! Contains the immutable record type shown by the browser and the inclusive
//! cost range used by the cost filter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One student application entry.
///
/// Created once when the record source is loaded and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Unique, stable identifier
    pub id: u32,
    /// Application name
    pub name: String,
    /// University the application targets
    pub university: String,
    /// Country of the university
    pub country: String,
    /// Programme duration, e.g. "2 years"
    pub duration: String,
    /// Total cost in whole currency units
    pub cost: u64,
    /// Application deadline
    pub deadline: NaiveDate,
    /// Teaching language
    pub language: String,
}

impl Record {
    /// Format cost with a currency sign.
    ///
    /// # Returns
    /// * `String` - Formatted cost (e.g., "$12500")
    pub fn format_cost(&self) -> String {
        format!("${}", self.cost)
    }

    /// Format deadline as an ISO calendar date.
    ///
    /// # Returns
    /// * `String` - Formatted date (e.g., "2024-01-15")
    pub fn format_deadline(&self) -> String {
        self.deadline.format("%Y-%m-%d").to_string()
    }
}

/// Inclusive cost bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    /// Lower bound (inclusive)
    pub min: u64,
    /// Upper bound (inclusive)
    pub max: u64,
}

impl CostRange {
    /// Create a new range. Callers guarantee `min <= max`.
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Check whether a cost lies within the range, both ends inclusive.
    pub fn contains(&self, cost: u64) -> bool {
        self.min <= cost && cost <= self.max
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(id: u32, cost: u64, deadline: &str) -> Record {
        Record {
            id,
            name: format!("Application {}", id),
            university: "University 1".to_string(),
            country: "Country 1".to_string(),
            duration: "2 years".to_string(),
            cost,
            deadline: NaiveDate::parse_from_str(deadline, "%Y-%m-%d").unwrap(),
            language: "English".to_string(),
        }
    }

    #[test]
    fn test_record_formatting() {
        let rec = record(1, 12500, "2024-01-15");
        assert_eq!(rec.format_cost(), "$12500");
        assert_eq!(rec.format_deadline(), "2024-01-15");
    }

    #[test]
    fn test_record_json_deadline_is_iso_date() {
        let rec = record(7, 1000, "2025-03-02");
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["deadline"], "2025-03-02");

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_cost_range_inclusive() {
        let range = CostRange::new(1000, 5000);
        assert!(range.contains(1000));
        assert!(range.contains(5000));
        assert!(!range.contains(999));
        assert!(!range.contains(5001));
    }
}
