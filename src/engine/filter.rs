//! Filter state.
//!
//! Holds the current equality filters and the cost range, and keeps the list
//! of active filter labels in sync with them. Every mutator returns `true`
//! only when the criteria actually changed; the caller then pushes a fresh
//! snapshot to the view engine.

use crate::catalog::CostRange;
use std::fmt;

/// A filterable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Name,
    Country,
    University,
    Duration,
    Language,
    /// The cost range filter
    Cost,
}

impl FilterField {
    /// Fields constrained by equality (or prefix, for duration).
    pub const TEXT: [FilterField; 5] = [
        FilterField::Name,
        FilterField::Country,
        FilterField::University,
        FilterField::Duration,
        FilterField::Language,
    ];

    /// Capitalized name used as the label prefix.
    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Name => "Name",
            FilterField::Country => "Country",
            FilterField::University => "University",
            FilterField::Duration => "Duration",
            FilterField::Language => "Language",
            FilterField::Cost => "Cost",
        }
    }

    /// Parse a label prefix back into a field.
    pub fn from_label(prefix: &str) -> Option<Self> {
        FilterField::TEXT
            .into_iter()
            .chain([FilterField::Cost])
            .find(|field| field.label() == prefix)
    }
}

/// Immutable snapshot of every filter selection.
///
/// An empty string means "no constraint" for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name: String,
    pub country: String,
    pub university: String,
    pub duration: String,
    pub language: String,
    pub cost_range: CostRange,
}

impl FilterCriteria {
    /// Criteria with no field constraints and the full cost range.
    pub fn unconstrained(bounds: CostRange) -> Self {
        Self {
            cost_range: bounds,
            ..Self::default()
        }
    }

    /// Current value of a text field (empty for `Cost`).
    pub fn text(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Country => &self.country,
            FilterField::University => &self.university,
            FilterField::Duration => &self.duration,
            FilterField::Language => &self.language,
            FilterField::Cost => "",
        }
    }

    fn text_mut(&mut self, field: FilterField) -> Option<&mut String> {
        match field {
            FilterField::Name => Some(&mut self.name),
            FilterField::Country => Some(&mut self.country),
            FilterField::University => Some(&mut self.university),
            FilterField::Duration => Some(&mut self.duration),
            FilterField::Language => Some(&mut self.language),
            FilterField::Cost => None,
        }
    }
}

/// One removable summary of an applied constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilterLabel {
    /// Field the label stands for
    pub field: FilterField,
    /// Text shown to the user, e.g. "Country: Country 2"
    pub text: String,
}

impl fmt::Display for ActiveFilterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Mutable filter selections plus derived labels.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    criteria: FilterCriteria,
    labels: Vec<ActiveFilterLabel>,
    bounds: CostRange,
}

impl FilterState {
    /// Create an unconstrained filter state over the given cost bounds.
    pub fn new(bounds: CostRange) -> Self {
        Self {
            criteria: FilterCriteria::unconstrained(bounds),
            labels: Vec::new(),
            bounds,
        }
    }

    /// Adopt new global cost bounds after the record store changed.
    ///
    /// # Details
    /// Drops every constraint and label; the cost range spans the new bounds.
    pub fn reset_bounds(&mut self, bounds: CostRange) {
        *self = Self::new(bounds);
    }

    /// Global cost bounds of the current store.
    pub fn bounds(&self) -> CostRange {
        self.bounds
    }

    /// Borrow the current criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Owned copy of the current criteria for the view engine.
    pub fn snapshot(&self) -> FilterCriteria {
        self.criteria.clone()
    }

    /// Active filter labels in the order they were applied.
    pub fn labels(&self) -> &[ActiveFilterLabel] {
        &self.labels
    }

    /// Set or clear an equality constraint.
    ///
    /// # Arguments
    /// * `field` - Text field to constrain
    /// * `value` - Required value; empty clears the constraint
    ///
    /// # Returns
    /// * `bool` - True if the criteria changed
    pub fn set_field(&mut self, field: FilterField, value: &str) -> bool {
        let Some(slot) = self.criteria.text_mut(field) else {
            tracing::warn!(field = field.label(), "not an equality filter field");
            return false;
        };
        if *slot == value {
            return false;
        }
        *slot = value.to_string();

        if value.is_empty() {
            self.drop_label(field);
        } else {
            self.upsert_label(field, format!("{}: {}", field.label(), value));
        }
        tracing::debug!(field = field.label(), value, "filter field set");
        true
    }

    /// Move the lower cost thumb.
    ///
    /// # Details
    /// Rejected when `min` exceeds the current upper bound. Values under the
    /// global minimum are raised to it.
    pub fn set_cost_min(&mut self, min: u64) -> bool {
        let current = self.criteria.cost_range;
        if min > current.max {
            tracing::warn!(min, max = current.max, "cost minimum above maximum rejected");
            return false;
        }
        let min = min.max(self.bounds.min);
        if min == current.min {
            return false;
        }
        self.criteria.cost_range = CostRange::new(min, current.max);
        self.sync_cost_label();
        true
    }

    /// Move the upper cost thumb.
    ///
    /// # Details
    /// Rejected when `max` is below the current lower bound. Values over the
    /// global maximum are lowered to it.
    pub fn set_cost_max(&mut self, max: u64) -> bool {
        let current = self.criteria.cost_range;
        if max < current.min {
            tracing::warn!(min = current.min, max, "cost maximum below minimum rejected");
            return false;
        }
        let max = max.min(self.bounds.max);
        if max == current.max {
            return false;
        }
        self.criteria.cost_range = CostRange::new(current.min, max);
        self.sync_cost_label();
        true
    }

    /// Move both cost thumbs, lower first.
    ///
    /// # Returns
    /// * `bool` - True if either thumb moved
    pub fn set_cost_range(&mut self, min: u64, max: u64) -> bool {
        let min_changed = self.set_cost_min(min);
        let max_changed = self.set_cost_max(max);
        min_changed || max_changed
    }

    /// Widen the cost range back to the global bounds.
    pub fn reset_cost_range(&mut self) -> bool {
        if self.criteria.cost_range == self.bounds {
            return false;
        }
        self.criteria.cost_range = self.bounds;
        self.drop_label(FilterField::Cost);
        true
    }

    /// Remove the label for a field and the constraint it represents.
    ///
    /// # Returns
    /// * `bool` - True if a label was removed
    pub fn remove_label(&mut self, field: FilterField) -> bool {
        if !self.labels.iter().any(|label| label.field == field) {
            return false;
        }
        if field == FilterField::Cost {
            self.criteria.cost_range = self.bounds;
        } else if let Some(slot) = self.criteria.text_mut(field) {
            slot.clear();
        }
        self.drop_label(field);
        tracing::debug!(field = field.label(), "filter label removed");
        true
    }

    /// Remove a label given its display text.
    ///
    /// # Details
    /// The field is read from the text before the first `": "`.
    pub fn remove_label_text(&mut self, text: &str) -> bool {
        let Some(field) = text
            .split_once(": ")
            .and_then(|(prefix, _)| FilterField::from_label(prefix))
        else {
            return false;
        };
        if !self.labels.iter().any(|label| label.text == text) {
            return false;
        }
        self.remove_label(field)
    }

    /// Drop every constraint and label.
    pub fn clear_all(&mut self) -> bool {
        let unconstrained = FilterCriteria::unconstrained(self.bounds);
        if self.criteria == unconstrained && self.labels.is_empty() {
            return false;
        }
        self.criteria = unconstrained;
        self.labels.clear();
        tracing::debug!("all filters cleared");
        true
    }

    fn sync_cost_label(&mut self) {
        let range = self.criteria.cost_range;
        if range == self.bounds {
            self.drop_label(FilterField::Cost);
        } else {
            self.upsert_label(
                FilterField::Cost,
                format!("Cost: ${} - ${}", range.min, range.max),
            );
        }
    }

    fn upsert_label(&mut self, field: FilterField, text: String) {
        match self.labels.iter_mut().find(|label| label.field == field) {
            Some(label) => label.text = text,
            None => self.labels.push(ActiveFilterLabel { field, text }),
        }
    }

    fn drop_label(&mut self, field: FilterField) {
        self.labels.retain(|label| label.field != field);
    }
}
