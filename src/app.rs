//! Application state management.
//!
//! Owns the record store, filter state, sort selector and pagination, and
//! re-derives the view after every change that reports success.

use crate::catalog::source::{DURATIONS, LANGUAGES};
use crate::catalog::{Record, RecordStore};
use crate::engine::{FilterField, FilterState, Pagination, SortKey, SortSelector, ViewEngine};
use crate::ui::ViewFrame;

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Browsing the record list
    List,
    /// Editing filters
    Filters,
}

/// Editable rows of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRow {
    Name,
    Country,
    University,
    Duration,
    Language,
    /// Lower cost thumb
    CostMin,
    /// Upper cost thumb
    CostMax,
}

impl FilterRow {
    /// Rows in display order.
    pub const ALL: [FilterRow; 7] = [
        FilterRow::Name,
        FilterRow::Country,
        FilterRow::University,
        FilterRow::Duration,
        FilterRow::Language,
        FilterRow::CostMin,
        FilterRow::CostMax,
    ];

    /// Filter field the row edits.
    pub fn field(&self) -> FilterField {
        match self {
            FilterRow::Name => FilterField::Name,
            FilterRow::Country => FilterField::Country,
            FilterRow::University => FilterField::University,
            FilterRow::Duration => FilterField::Duration,
            FilterRow::Language => FilterField::Language,
            FilterRow::CostMin | FilterRow::CostMax => FilterField::Cost,
        }
    }

    /// Row caption.
    pub fn caption(&self) -> &'static str {
        match self {
            FilterRow::CostMin => "Min cost",
            FilterRow::CostMax => "Max cost",
            other => other.field().label(),
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Full record set
    pub store: RecordStore,
    /// Filter selections and labels
    pub filters: FilterState,
    /// Current ordering
    pub sort: SortSelector,
    /// Page over the derived view
    pub pagination: Pagination,
    /// Derived view
    view: ViewEngine,
    /// Selected record index within the current page
    pub selected_index: usize,
    /// Current UI mode
    pub mode: UiMode,
    /// Selected filter panel row (index into `FilterRow::ALL`)
    pub filter_row: usize,
    /// Status message to display
    pub status_message: Option<String>,
    /// Cost thumb step
    cost_step: u64,
}

impl App {
    /// Create an application state with an empty store.
    ///
    /// # Arguments
    /// * `page_size` - Records per page
    /// * `sort` - Initial sort key
    /// * `cost_step` - Amount a cost thumb moves per step
    pub fn new(page_size: usize, sort: SortKey, cost_step: u64) -> Self {
        let mut app = Self {
            store: RecordStore::new(Vec::new()),
            filters: FilterState::default(),
            sort: SortSelector::new(sort),
            pagination: Pagination::new(page_size),
            view: ViewEngine::default(),
            selected_index: 0,
            mode: UiMode::List,
            filter_row: 0,
            status_message: None,
            cost_step: cost_step.max(1),
        };
        app.refresh();
        app
    }

    /// Replace the record set.
    ///
    /// # Details
    /// Recomputes the global cost bounds, drops all filters and returns to
    /// page 1. The sort key is kept.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.store.replace(records);
        self.filters.reset_bounds(self.store.cost_bounds());
        tracing::info!(
            count = self.store.len(),
            min_cost = self.filters.bounds().min,
            max_cost = self.filters.bounds().max,
            "record store replaced"
        );
        self.refresh();
    }

    /// Push the current snapshots to the view engine.
    ///
    /// # Details
    /// When the derived view changes, pagination is reset to page 1 and the
    /// selection to the first record of the page.
    fn refresh(&mut self) {
        let changed = self
            .view
            .update(&self.store, self.filters.snapshot(), self.sort.key());
        if changed {
            self.pagination.reset(self.view.len());
            self.selected_index = 0;
        }
    }

    /// Records matching the filters, in display order.
    pub fn filtered_records(&self) -> &[Record] {
        self.view.records()
    }

    /// Records on the current page.
    pub fn page_records(&self) -> &[Record] {
        &self.view.records()[self.pagination.page_range()]
    }

    /// Currently selected record.
    pub fn selected_record(&self) -> Option<&Record> {
        self.page_records().get(self.selected_index)
    }

    /// Currently selected filter panel row.
    pub fn current_filter_row(&self) -> FilterRow {
        FilterRow::ALL[self.filter_row % FilterRow::ALL.len()]
    }

    /// Move selection up, wrapping to the bottom of the page.
    pub fn move_up(&mut self) {
        let len = self.page_records().len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Move selection down, wrapping to the top of the page.
    pub fn move_down(&mut self) {
        let len = self.page_records().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Move the filter panel cursor.
    pub fn move_filter_row(&mut self, forward: bool) {
        let len = FilterRow::ALL.len();
        self.filter_row = if forward {
            (self.filter_row + 1) % len
        } else {
            (self.filter_row + len - 1) % len
        };
    }

    /// Jump to a page.
    ///
    /// # Returns
    /// * `bool` - False if the page does not exist
    pub fn set_page(&mut self, page: usize) -> bool {
        let accepted = self.pagination.set_page(page);
        if accepted {
            self.selected_index = 0;
        }
        accepted
    }

    /// Go to the next page.
    pub fn next_page(&mut self) -> bool {
        let accepted = self.pagination.next_page();
        if accepted {
            self.selected_index = 0;
        }
        accepted
    }

    /// Go to the previous page.
    pub fn prev_page(&mut self) -> bool {
        let accepted = self.pagination.prev_page();
        if accepted {
            self.selected_index = 0;
        }
        accepted
    }

    /// Values a text filter can take, "any" (empty) first.
    ///
    /// # Details
    /// Name, country and university come from the store in first-seen order;
    /// duration and language use fixed lists.
    pub fn filter_options(&self, field: FilterField) -> Vec<String> {
        let mut options = vec![String::new()];
        match field {
            FilterField::Name => options.extend(self.store.distinct(|r| &r.name)),
            FilterField::Country => options.extend(self.store.distinct(|r| &r.country)),
            FilterField::University => options.extend(self.store.distinct(|r| &r.university)),
            FilterField::Duration => options.extend(DURATIONS.iter().map(|d| d.to_string())),
            FilterField::Language => options.extend(LANGUAGES.iter().map(|l| l.to_string())),
            FilterField::Cost => {}
        }
        options
    }

    /// Set an equality filter and re-derive the view.
    pub fn set_filter(&mut self, field: FilterField, value: &str) -> bool {
        let changed = self.filters.set_field(field, value);
        if changed {
            self.refresh();
        }
        changed
    }

    /// Step the selected filter row.
    ///
    /// # Details
    /// Text rows cycle through `filter_options`; cost rows move their thumb by
    /// the configured step. A rejected thumb move leaves a status message.
    pub fn step_filter(&mut self, forward: bool) {
        let row = self.current_filter_row();
        match row {
            FilterRow::CostMin | FilterRow::CostMax => self.step_cost(row, forward),
            _ => {
                let field = row.field();
                let options = self.filter_options(field);
                let current = self.filters.criteria().text(field);
                let index = options.iter().position(|o| o == current).unwrap_or(0);
                let next = if forward {
                    (index + 1) % options.len()
                } else {
                    (index + options.len() - 1) % options.len()
                };
                let value = options[next].clone();
                self.set_filter(field, &value);
            }
        }
    }

    fn step_cost(&mut self, row: FilterRow, forward: bool) {
        let range = self.filters.criteria().cost_range;
        let step = self.cost_step;
        let shift = |value: u64| {
            if forward {
                value.saturating_add(step)
            } else {
                value.saturating_sub(step)
            }
        };

        if row == FilterRow::CostMin {
            if !self.set_cost_range(shift(range.min), range.max)
                && forward
                && range.min < range.max
            {
                self.set_status("Minimum cost cannot exceed maximum".to_string());
            }
        } else if !self.set_cost_range(range.min, shift(range.max))
            && !forward
            && range.min < range.max
        {
            self.set_status("Maximum cost cannot go below minimum".to_string());
        }
    }

    /// Move the cost thumbs and re-derive the view.
    pub fn set_cost_range(&mut self, min: u64, max: u64) -> bool {
        let changed = self.filters.set_cost_range(min, max);
        if changed {
            self.refresh();
        }
        changed
    }

    /// Remove the constraint behind the selected filter row.
    pub fn remove_selected_filter(&mut self) -> bool {
        self.remove_filter(self.current_filter_row().field())
    }

    /// Remove an active filter label and its constraint.
    pub fn remove_filter(&mut self, field: FilterField) -> bool {
        let changed = self.filters.remove_label(field);
        if changed {
            self.refresh();
        }
        changed
    }

    /// Remove the most recently applied filter label.
    pub fn remove_last_filter(&mut self) -> bool {
        let Some(text) = self.filters.labels().last().map(|label| label.text.clone()) else {
            return false;
        };
        let changed = self.filters.remove_label_text(&text);
        if changed {
            self.refresh();
        }
        changed
    }

    /// Reset the cost range to the global bounds.
    pub fn reset_cost_range(&mut self) -> bool {
        let changed = self.filters.reset_cost_range();
        if changed {
            self.refresh();
        }
        changed
    }

    /// Drop every filter.
    pub fn clear_filters(&mut self) -> bool {
        let changed = self.filters.clear_all();
        if changed {
            self.refresh();
        }
        changed
    }

    /// Select a sort key.
    pub fn set_sort(&mut self, key: SortKey) -> bool {
        let changed = self.sort.set(key);
        if changed {
            self.refresh();
        }
        changed
    }

    /// Step to the next sort key.
    pub fn cycle_sort(&mut self) -> bool {
        self.set_sort(self.sort.key().next())
    }

    /// Drop the sort key.
    pub fn clear_sort(&mut self) -> bool {
        let changed = self.sort.clear();
        if changed {
            self.refresh();
        }
        changed
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Snapshot of everything the renderer needs.
    pub fn frame(&self) -> ViewFrame<'_> {
        ViewFrame {
            page: self.page_records(),
            page_offset: self.pagination.page_range().start,
            filtered_count: self.filtered_records().len(),
            total_count: self.store.len(),
            labels: self.filters.labels(),
            criteria: self.filters.criteria(),
            bounds: self.filters.bounds(),
            sort: self.sort.key(),
            current_page: self.pagination.current_page(),
            total_pages: self.pagination.total_pages(),
            selected_index: self.selected_index,
            mode: self.mode,
            filter_row: self.current_filter_row(),
            status: self.status_message.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CostRange;
    use crate::catalog::models::tests::record;

    fn create_records(count: u32) -> Vec<Record> {
        (1..=count)
            .map(|id| {
                let mut rec = record(id, 1000 + u64::from(id) * 100, "2024-01-01");
                rec.country = format!("Country {}", id % 3 + 1);
                rec
            })
            .collect()
    }

    fn page_ids(app: &App) -> Vec<u32> {
        app.page_records().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_app_new() {
        let app = App::new(10, SortKey::None, 500);
        assert_eq!(app.store.len(), 0);
        assert_eq!(app.pagination.current_page(), 1);
        assert_eq!(app.pagination.total_pages(), 1);
        assert!(app.page_records().is_empty());
        assert_eq!(app.mode, UiMode::List);
    }

    #[test]
    fn test_app_set_records_sets_bounds_and_pages() {
        let mut app = App::new(10, SortKey::None, 500);
        app.set_records(create_records(25));
        assert_eq!(app.filters.bounds(), CostRange::new(1100, 3500));
        assert_eq!(app.pagination.total_pages(), 3);
        assert_eq!(page_ids(&app), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_app_page_four_of_three_rejected() {
        let mut app = App::new(10, SortKey::None, 500);
        app.set_records(create_records(25));
        assert!(app.set_page(3));
        assert!(!app.set_page(4));
        assert_eq!(app.pagination.current_page(), 3);
        assert_eq!(page_ids(&app), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_app_filter_change_resets_page() {
        let mut app = App::new(5, SortKey::None, 500);
        app.set_records(create_records(30));
        app.set_page(3);
        assert!(app.set_filter(FilterField::Country, "Country 2"));
        assert_eq!(app.pagination.current_page(), 1);
        assert_eq!(app.filtered_records().len(), 10);
        assert!(app.filtered_records().iter().all(|r| r.country == "Country 2"));
    }

    #[test]
    fn test_app_sort_change_resets_page() {
        let mut app = App::new(5, SortKey::None, 500);
        app.set_records(create_records(12));
        app.set_page(2);
        assert!(app.set_sort(SortKey::CostDescending));
        assert_eq!(app.pagination.current_page(), 1);
        assert_eq!(page_ids(&app), vec![12, 11, 10, 9, 8]);
    }

    #[test]
    fn test_app_unchanged_sort_keeps_page() {
        let mut app = App::new(5, SortKey::CostAscending, 500);
        app.set_records(create_records(12));
        app.set_page(2);
        assert!(!app.set_sort(SortKey::CostAscending));
        assert_eq!(app.pagination.current_page(), 2);
    }

    #[test]
    fn test_app_store_change_resets_filters_and_page() {
        let mut app = App::new(5, SortKey::None, 500);
        app.set_records(create_records(12));
        app.set_filter(FilterField::Language, "English");
        app.set_page(2);
        app.set_records(create_records(3));
        assert_eq!(app.pagination.current_page(), 1);
        assert!(app.filters.labels().is_empty());
        assert_eq!(app.filters.bounds(), CostRange::new(1100, 1300));

        app.set_records(Vec::new());
        assert_eq!(app.filters.bounds(), CostRange::new(0, 0));
        assert!(app.page_records().is_empty());
        assert_eq!(app.pagination.total_pages(), 1);
    }

    #[test]
    fn test_app_step_filter_cycles_options() {
        let mut app = App::new(10, SortKey::None, 500);
        app.set_records(create_records(6));
        app.filter_row = 1; // Country
        assert_eq!(app.current_filter_row(), FilterRow::Country);

        app.step_filter(true);
        assert_eq!(app.filters.criteria().country, "Country 2");
        app.step_filter(true);
        assert_eq!(app.filters.criteria().country, "Country 3");
        app.step_filter(false);
        app.step_filter(false);
        assert_eq!(app.filters.criteria().country, "");
        assert!(app.filters.labels().is_empty());
        app.step_filter(false);
        assert_eq!(app.filters.criteria().country, "Country 1");
    }

    #[test]
    fn test_app_duration_option_matches_by_prefix() {
        let mut app = App::new(10, SortKey::None, 500);
        app.set_records(create_records(4));
        assert!(app.set_filter(FilterField::Duration, "2"));
        assert_eq!(app.filtered_records().len(), 4);
        assert!(app.set_filter(FilterField::Duration, "1 year"));
        assert!(app.filtered_records().is_empty());
    }

    #[test]
    fn test_app_cost_thumbs_step() {
        let mut app = App::new(10, SortKey::None, 1000);
        app.set_records(vec![
            record(1, 1000, "2024-01-01"),
            record(2, 5000, "2024-01-01"),
            record(3, 9000, "2024-01-01"),
        ]);
        app.filter_row = 5; // Min cost
        app.step_filter(true);
        assert_eq!(app.filters.criteria().cost_range, CostRange::new(2000, 9000));
        assert_eq!(page_ids(&app), vec![2, 3]);

        app.filter_row = 6; // Max cost
        for _ in 0..7 {
            app.step_filter(false);
        }
        assert_eq!(app.filters.criteria().cost_range, CostRange::new(2000, 2000));
        app.step_filter(false);
        assert_eq!(app.filters.criteria().cost_range, CostRange::new(2000, 2000));
        assert!(app.status_message.is_none());
        assert!(app.page_records().is_empty());

        assert!(app.reset_cost_range());
        assert_eq!(app.filtered_records().len(), 3);
    }

    #[test]
    fn test_app_min_thumb_above_max_rejected() {
        let mut app = App::new(10, SortKey::None, 3000);
        app.set_records(vec![record(1, 1000, "2024-01-01"), record(2, 5000, "2024-01-01")]);
        app.filter_row = 6;
        app.step_filter(false); // max 2000
        app.filter_row = 5;
        app.step_filter(true); // min 4000 > 2000
        assert_eq!(app.filters.criteria().cost_range, CostRange::new(1000, 2000));
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_app_remove_selected_filter() {
        let mut app = App::new(10, SortKey::None, 500);
        app.set_records(create_records(6));
        app.set_filter(FilterField::Country, "Country 1");
        app.set_filter(FilterField::Language, "English");
        app.filter_row = 1;
        assert!(app.remove_selected_filter());
        assert_eq!(app.filters.labels().len(), 1);
        assert_eq!(app.filtered_records().len(), 6);
        assert!(!app.remove_selected_filter());
    }

    #[test]
    fn test_app_remove_last_filter() {
        let mut app = App::new(10, SortKey::None, 500);
        app.set_records(create_records(6));
        app.set_filter(FilterField::Country, "Country 1");
        app.set_filter(FilterField::Language, "French");
        assert!(app.filtered_records().is_empty());
        assert!(app.remove_last_filter());
        assert_eq!(app.filtered_records().len(), 2);
        assert!(app.remove_last_filter());
        assert!(!app.remove_last_filter());
        assert_eq!(app.filtered_records().len(), 6);
    }

    #[test]
    fn test_app_cycle_sort() {
        let mut app = App::new(10, SortKey::None, 500);
        app.set_records(create_records(3));
        assert!(app.cycle_sort());
        assert_eq!(app.sort.key(), SortKey::CostAscending);
        assert!(app.cycle_sort());
        assert_eq!(app.frame().page[0].id, 3);
    }

    #[test]
    fn test_app_clear_filters_and_sort() {
        let mut app = App::new(10, SortKey::DeadlineAscending, 500);
        app.set_records(create_records(6));
        app.set_filter(FilterField::Country, "Country 1");
        assert!(app.clear_filters());
        assert_eq!(app.filtered_records().len(), 6);
        assert!(app.clear_sort());
        assert_eq!(app.sort.key(), SortKey::None);
    }

    #[test]
    fn test_app_move_selection_within_page() {
        let mut app = App::new(3, SortKey::None, 500);
        app.set_records(create_records(5));
        app.move_down();
        assert_eq!(app.selected_record().map(|r| r.id), Some(2));
        app.move_up();
        app.move_up();
        assert_eq!(app.selected_index, 2);
        assert!(app.next_page());
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.selected_record().map(|r| r.id), Some(4));
        assert!(app.prev_page());
        assert!(!app.prev_page());
    }

    #[test]
    fn test_app_frame_reports_view() {
        let mut app = App::new(4, SortKey::None, 500);
        app.set_records(create_records(9));
        app.set_filter(FilterField::Country, "Country 1");
        app.next_page();
        let frame = app.frame();
        assert_eq!(frame.filtered_count, 3);
        assert_eq!(frame.total_count, 9);
        assert_eq!(frame.current_page, 1);
        assert_eq!(frame.total_pages, 1);
        assert_eq!(frame.labels.len(), 1);
        assert_eq!(frame.labels[0].text, "Country: Country 1");
        assert_eq!(frame.page.len(), 3);
    }
}
