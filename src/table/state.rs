//! The selectable table model.
//!
//! [`SelectableTable`] owns filter text, sort, pagination and selection over
//! an in-memory collection of rows. The filtered and sorted view is cached as
//! a list of row indices and only rebuilt when one of its inputs changes, so
//! repeated renders are cheap. Pagination is a slice over that cached view.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use super::column::{Column, TableRow};
use super::filter;
use super::pagination::{Pagination, DEFAULT_ROWS_PER_PAGE};
use super::selection::{Selection, SelectionMode};
use super::sort::{self, SortConfig};

/// Called with the full current selection after every selection change.
pub type SelectHandler<R> = Box<dyn FnMut(Vec<R>)>;

/// Called when a clickable row is activated.
pub type RowClickHandler<R> = Box<dyn FnMut(&R)>;

/// Behavior switches for a [`SelectableTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Single (radio) or multiple (checkbox) selection.
    pub selection_mode: SelectionMode,
    /// Whether the frontend shows the filter input.
    pub show_search_and_filter: bool,
    /// Whether activating a row calls the row-click handler instead of toggling it.
    pub row_clickable: bool,
    /// Page size.
    pub rows_per_page: usize,
    /// When false every filtered row is on a single page.
    pub show_pagination: bool,
    /// Suppress all selection changes and row activation.
    pub disabled: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::Single,
            show_search_and_filter: true,
            row_clickable: false,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            show_pagination: true,
            disabled: false,
        }
    }
}

/// A filterable, sortable, paginated, selectable table over rows of type `R`.
pub struct SelectableTable<R> {
    /// Column descriptors in display order.
    columns: Vec<Column<R>>,
    /// The full data set.
    rows: Vec<R>,
    /// Behavior switches.
    options: TableOptions,
    /// Free-text filter.
    filter_text: String,
    /// Active sort, if any.
    sort: Option<SortConfig>,
    /// Current page and page size.
    pagination: Pagination,
    /// Selected row ids.
    selection: Selection,
    /// Cached indices of filtered rows in sorted order.
    view: Vec<usize>,
    /// Bumped every time `view` is rebuilt.
    view_generation: u64,
    /// Hash of the last observed reset trigger.
    reset_trigger: Option<u64>,
    /// Selection change callback.
    on_select: Option<SelectHandler<R>>,
    /// Row click callback.
    on_row_click: Option<RowClickHandler<R>>,
}

impl<R: TableRow + Clone> SelectableTable<R> {
    /// Create a table with default options.
    pub fn new(columns: Vec<Column<R>>, rows: Vec<R>) -> Self {
        Self::with_options(columns, rows, TableOptions::default())
    }

    /// Create a table with the given options.
    pub fn with_options(columns: Vec<Column<R>>, rows: Vec<R>, options: TableOptions) -> Self {
        let mut table = Self {
            columns,
            rows,
            pagination: Pagination::new(options.rows_per_page),
            options,
            filter_text: String::new(),
            sort: None,
            selection: Selection::new(),
            view: Vec::new(),
            view_generation: 0,
            reset_trigger: None,
            on_select: None,
            on_row_click: None,
        };
        table.refresh_view();
        table
    }

    /// Install the selection change callback.
    pub fn on_select<F>(mut self, handler: F) -> Self
    where
        F: FnMut(Vec<R>) + 'static,
    {
        self.on_select = Some(Box::new(handler));
        self
    }

    /// Install the row click callback.
    pub fn on_row_click<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&R) + 'static,
    {
        self.on_row_click = Some(Box::new(handler));
        self
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Get the column descriptors.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Get the full data set.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Get the options.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Replace the data set.
    ///
    /// Filter text, sort and selection are kept. Selected ids that no longer
    /// exist simply stop appearing in materialized selections.
    pub fn set_data(&mut self, rows: Vec<R>) {
        debug!(count = rows.len(), "Replacing table data");
        self.rows = rows;
        self.refresh_view();
    }

    /// Replace the column descriptors.
    ///
    /// A sort on a column that no longer exists is dropped.
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        debug!(count = columns.len(), "Replacing table columns");
        self.columns = columns;
        if let Some(config) = &self.sort {
            if !self.columns.iter().any(|c| c.accessor == config.key) {
                debug!(key = %config.key, "Dropping sort on removed column");
                self.sort = None;
            }
        }
        self.refresh_view();
    }

    /// Replace the behavior switches.
    ///
    /// Filter text, sort and selection are kept. A new page size keeps the
    /// current page when it is still in range. Switching to single mode keeps
    /// only the most recently selected row and reports the new selection.
    pub fn set_options(&mut self, options: TableOptions) {
        if options == self.options {
            return;
        }
        debug!(?options, "Updating table options");

        if options.rows_per_page != self.options.rows_per_page {
            let page = self.pagination.current_page();
            self.pagination = Pagination::new(options.rows_per_page);
            self.pagination.go_to(page, self.view.len());
        }

        let to_single = options.selection_mode == SelectionMode::Single
            && self.options.selection_mode != SelectionMode::Single;
        self.options = options;

        if to_single && self.selection.keep_latest() {
            self.notify_select();
        }
        self.refresh_view();
    }

    /// Check if selection changes are suppressed.
    pub fn is_disabled(&self) -> bool {
        self.options.disabled
    }

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.options.selection_mode
    }

    // ========================================================================
    // Filtering and sorting
    // ========================================================================

    /// Get the current filter text.
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Set the free-text filter.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.filter_text {
            return;
        }
        trace!(filter = %text, "Filter text changed");
        self.filter_text = text;
        self.refresh_view();
    }

    /// Get the active sort.
    pub fn sort(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    /// Set or clear the active sort.
    pub fn set_sort(&mut self, sort: Option<SortConfig>) {
        if sort == self.sort {
            return;
        }
        self.sort = sort;
        self.refresh_view();
    }

    /// Handle a click on a column header.
    ///
    /// The same column flips direction; a new column sorts ascending.
    pub fn toggle_sort(&mut self, key: &str) {
        let next = SortConfig::toggled(self.sort.as_ref(), key);
        debug!(key = %next.key, direction = %next.direction, "Sorting table");
        self.sort = Some(next);
        self.refresh_view();
    }

    /// Number of rows that pass the filter.
    pub fn filtered_count(&self) -> usize {
        self.view.len()
    }

    /// Changes whenever the filtered and sorted view is rebuilt.
    pub fn view_generation(&self) -> u64 {
        self.view_generation
    }

    /// All filtered rows in sorted order, across every page.
    pub fn sorted_rows(&self) -> Vec<&R> {
        self.view.iter().map(|&i| &self.rows[i]).collect()
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// The 1-indexed current page.
    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    /// Rows per page.
    pub fn rows_per_page(&self) -> usize {
        self.pagination.rows_per_page()
    }

    /// Number of pages for the filtered rows.
    ///
    /// Always 1 when pagination is turned off and there is data.
    pub fn total_pages(&self) -> usize {
        if self.options.show_pagination {
            self.pagination.total_pages(self.view.len())
        } else {
            usize::from(!self.view.is_empty())
        }
    }

    /// Jump to a page, clamped to the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        if self.pagination.go_to(page, self.view.len()) {
            debug!(page = self.current_page(), "Changed page");
        }
    }

    /// Advance one page.
    pub fn next_page(&mut self) {
        if self.pagination.next(self.view.len()) {
            debug!(page = self.current_page(), "Changed page");
        }
    }

    /// Go back one page.
    pub fn prev_page(&mut self) {
        if self.pagination.prev(self.view.len()) {
            debug!(page = self.current_page(), "Changed page");
        }
    }

    /// Rows on the current page, in display order.
    pub fn page_rows(&self) -> Vec<&R> {
        self.page_indices().iter().map(|&i| &self.rows[i]).collect()
    }

    fn page_indices(&self) -> &[usize] {
        if self.options.show_pagination {
            &self.view[self.pagination.page_range(self.view.len())]
        } else {
            &self.view
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Check if a row id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Selected ids in selection order.
    pub fn selected_ids(&self) -> &[String] {
        self.selection.ids()
    }

    /// Number of selected ids.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Materialize the selected rows, in selection order.
    pub fn selected_rows(&self) -> Vec<R> {
        let by_id: HashMap<&str, &R> = self.rows.iter().map(|r| (r.id(), r)).collect();
        self.selection
            .ids()
            .iter()
            .filter_map(|id| by_id.get(id.as_str()).map(|r| (*r).clone()))
            .collect()
    }

    /// Toggle one row's checkbox (or radio button).
    ///
    /// In single mode the row becomes the only selected row. In multiple mode
    /// it is added or removed without touching other pages.
    pub fn toggle_row(&mut self, id: &str) {
        if self.options.disabled {
            trace!(id, "Ignoring toggle on disabled table");
            return;
        }

        match self.options.selection_mode {
            SelectionMode::Single => self.selection.select_only(id),
            SelectionMode::Multiple => self.selection.toggle(id),
        }
        trace!(id, selected = self.selection.len(), "Toggled row");
        self.notify_select();
    }

    /// Activate a row, as if it was clicked.
    ///
    /// Clickable tables with a row-click handler hand the row to that
    /// handler; otherwise the row's selection is toggled.
    pub fn activate_row(&mut self, id: &str) {
        if self.options.disabled {
            return;
        }

        if self.options.row_clickable {
            if let Some(handler) = self.on_row_click.as_mut() {
                if let Some(row) = self.rows.iter().find(|r| r.id() == id) {
                    handler(row);
                }
                return;
            }
        }
        self.toggle_row(id);
    }

    /// Check if every row on the current page is selected.
    ///
    /// False for an empty page.
    pub fn is_page_selected(&self) -> bool {
        let page = self.page_indices();
        !page.is_empty() && self.page_selected_count() == page.len()
    }

    fn page_selected_count(&self) -> usize {
        self.page_indices()
            .iter()
            .filter(|&&i| self.selection.contains(self.rows[i].id()))
            .count()
    }

    /// Toggle the "select all" checkbox for the current page.
    ///
    /// When every row on the page is already selected the whole selection is
    /// cleared, including rows on other pages. Otherwise the page's rows are
    /// added to the selection. Only available in multiple mode.
    pub fn toggle_select_all(&mut self) {
        if self.options.disabled || self.options.selection_mode != SelectionMode::Multiple {
            return;
        }

        let page: Vec<String> = self
            .page_indices()
            .iter()
            .map(|&i| self.rows[i].id().to_string())
            .collect();

        if self.page_selected_count() == page.len() {
            debug!("Clearing selection from select-all");
            self.selection.clear();
        } else {
            debug!(count = page.len(), "Selecting current page");
            for id in &page {
                self.selection.insert(id);
            }
        }
        self.notify_select();
    }

    /// Observe the caller's reset trigger.
    ///
    /// The first observed value is only remembered. Any later value that
    /// differs from the previous one clears the selection and reports an
    /// empty selection.
    pub fn sync_reset_trigger<T: Hash + ?Sized>(&mut self, trigger: &T) {
        let mut hasher = DefaultHasher::new();
        trigger.hash(&mut hasher);
        let hash = hasher.finish();

        let previous = self.reset_trigger.replace(hash);
        if previous.is_some_and(|prev| prev != hash) {
            debug!("Reset trigger changed, clearing selection");
            self.selection.clear();
            self.notify_select();
        }
    }

    fn notify_select(&mut self) {
        let selected = self.selected_rows();
        if let Some(handler) = self.on_select.as_mut() {
            handler(selected);
        }
    }

    // ========================================================================
    // Derived view
    // ========================================================================

    fn refresh_view(&mut self) {
        let mut view = filter::filter_indices(&self.rows, &self.columns, &self.filter_text);
        if let Some(config) = &self.sort {
            sort::sort_indices(&self.rows, &mut view, config);
        }
        self.view = view;
        self.view_generation += 1;

        if self.pagination.clamp(self.view.len()) {
            debug!(
                page = self.pagination.current_page(),
                "Current page moved back into range"
            );
        }
    }
}
