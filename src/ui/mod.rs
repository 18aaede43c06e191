//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface. Every
//! widget renders from a [`ViewFrame`] snapshot and never touches app state.

pub mod filters;
pub mod list;
pub mod pagination;
pub mod sort;

pub use filters::render_filters;
pub use list::render_list;
pub use pagination::render_pagination;
pub use sort::render_sort;

use crate::app::{FilterRow, UiMode};
use crate::catalog::{CostRange, Record};
use crate::engine::filter::FilterCriteria;
use crate::engine::{ActiveFilterLabel, SortKey};

/// Everything a render pass needs, borrowed from the app.
#[derive(Debug, Clone, Copy)]
pub struct ViewFrame<'a> {
    /// Records on the current page
    pub page: &'a [Record],
    /// Position of the first page record within the filtered result
    pub page_offset: usize,
    /// Records matching the filters
    pub filtered_count: usize,
    /// Records in the store
    pub total_count: usize,
    /// Active filter labels
    pub labels: &'a [ActiveFilterLabel],
    /// Current filter selections
    pub criteria: &'a FilterCriteria,
    /// Global cost bounds
    pub bounds: CostRange,
    /// Current sort key
    pub sort: SortKey,
    /// Current page, starting at 1
    pub current_page: usize,
    /// Number of pages
    pub total_pages: usize,
    /// Selected record within the page
    pub selected_index: usize,
    /// Current UI mode
    pub mode: UiMode,
    /// Selected filter panel row
    pub filter_row: FilterRow,
    /// Status message
    pub status: Option<&'a str>,
}
