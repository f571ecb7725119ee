//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern for predictable
//! state management in the TUI application: [`App::update`] folds events into
//! state and [`App::view`] draws it.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::{debug, info, trace};

use crate::events::{Command, Event, KeyBindings};
use crate::table::{Column, SelectableTable, SelectionMode, TableOptions, TableRow};
use crate::ui::{
    centered_rect, render_context_help, render_pagination, DetailAction, DetailView, FilterAction,
    FilterInput, HelpAction, HelpView, KeyContext, StatusLine, TableView, Theme,
};

/// The current view/screen state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Moving around the table.
    #[default]
    Browsing,
    /// Typing into the filter bar.
    Filtering,
    /// Help popup is open.
    Help,
    /// Row detail popup is open.
    Detail,
    /// Application is in the process of exiting.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App<R> {
    /// Shown in the header.
    title: String,
    /// The current view state.
    state: AppState,
    /// The table model.
    table: SelectableTable<R>,
    /// Cursor state for the table.
    table_view: TableView,
    /// Filter bar text.
    filter: FilterInput,
    /// Row detail popup.
    detail: DetailView,
    /// Key help popup.
    help: HelpView,
    /// Key to command mapping.
    bindings: KeyBindings,
    /// Colors.
    theme: Theme,
    /// Feedback line.
    status: StatusLine,
    /// Bumped by the reset key and fed to the table's reset trigger.
    reset_counter: u64,
    /// Latest selection reported by the table.
    selection: Rc<RefCell<Vec<R>>>,
    /// Row id handed to the row-click handler, waiting to be shown.
    clicked: Rc<RefCell<Option<String>>>,
}

impl<R: TableRow + Clone + 'static> App<R> {
    /// Create a new application instance.
    pub fn new(
        title: impl Into<String>,
        columns: Vec<Column<R>>,
        rows: Vec<R>,
        options: TableOptions,
        bindings: KeyBindings,
        theme: Theme,
    ) -> Self {
        let title = title.into();
        debug!(title = %title, rows = rows.len(), "Creating application instance");

        let selection = Rc::new(RefCell::new(Vec::new()));
        let clicked = Rc::new(RefCell::new(None));

        let selection_sink = Rc::clone(&selection);
        let clicked_sink = Rc::clone(&clicked);
        let mut table = SelectableTable::with_options(columns, rows, options)
            .on_select(move |rows: Vec<R>| *selection_sink.borrow_mut() = rows)
            .on_row_click(move |row: &R| *clicked_sink.borrow_mut() = Some(row.id().to_string()));

        let reset_counter = 0;
        table.sync_reset_trigger(&reset_counter);

        Self {
            title,
            state: AppState::Browsing,
            table,
            table_view: TableView::new(),
            filter: FilterInput::new(),
            detail: DetailView::new(),
            help: HelpView::new(),
            bindings,
            theme,
            status: StatusLine::new(),
            reset_counter,
            selection,
            clicked,
        }
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Exiting
    }

    /// Get the current state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Get the table model.
    pub fn table(&self) -> &SelectableTable<R> {
        &self.table
    }

    /// Get the table cursor state.
    pub fn table_view(&self) -> &TableView {
        &self.table_view
    }

    /// Get the status line.
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// The last selection the table reported.
    pub fn selection(&self) -> Vec<R> {
        self.selection.borrow().clone()
    }

    /// Id of the row shown in the detail popup.
    pub fn detail_row_id(&self) -> Option<&str> {
        self.detail.row_id()
    }

    // ========================================================================
    // Update
    // ========================================================================

    /// Handle an event and update state accordingly.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Paste(text) => self.handle_paste(&text),
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => self.status.tick(),
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Quit on Ctrl+C (always works)
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.quit();
            return;
        }

        match self.state {
            AppState::Browsing => {
                if let Some(command) = self.bindings.resolve(key_event) {
                    self.handle_command(command);
                }
            }
            AppState::Filtering => {
                if let Some(action) = self.filter.handle_input(key_event) {
                    self.handle_filter_action(action);
                }
            }
            AppState::Help => {
                if let Some(HelpAction::Close) = self.help.handle_input(key_event) {
                    self.state = AppState::Browsing;
                }
            }
            AppState::Detail => {
                if let Some(DetailAction::Close) = self.detail.handle_input(key_event) {
                    self.state = AppState::Browsing;
                }
            }
            AppState::Exiting => {}
        }
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => self.quit(),
            Command::Help => {
                self.help.reset_scroll();
                self.state = AppState::Help;
            }
            Command::Filter => {
                if self.table.options().show_search_and_filter {
                    debug!("Editing filter");
                    self.state = AppState::Filtering;
                } else {
                    self.status.warning("Filtering is turned off");
                }
            }
            Command::ClearFilter => {
                if !self.filter.value().is_empty() {
                    self.filter.clear();
                    self.table.set_filter_text("");
                    self.status.info("Filter cleared");
                }
            }
            Command::ResetSelection => self.reset_selection(),
            Command::ToggleRow | Command::ActivateRow | Command::SelectAll
                if self.table.is_disabled() =>
            {
                self.status.warning("Table is read only");
            }
            Command::SelectAll if self.table.selection_mode() == SelectionMode::Single => {
                self.status.info("Select all needs multiple selection mode");
            }
            Command::ToggleRow | Command::ActivateRow | Command::SelectAll => {
                let before = self.table.selected_ids().to_vec();
                self.table_view.handle_command(command, &mut self.table);

                let clicked = self.clicked.borrow_mut().take();
                if let Some(id) = clicked {
                    debug!(id = %id, "Opening row detail");
                    self.detail.show(id);
                    self.state = AppState::Detail;
                } else if self.table.selected_ids() != before.as_slice() {
                    self.status
                        .success(format!("{} selected", self.table.selected_count()));
                }
            }
            Command::Sort => {
                self.table_view.handle_command(command, &mut self.table);
                if let Some(sort) = self.table.sort() {
                    let header = self
                        .table
                        .columns()
                        .iter()
                        .find(|c| c.accessor == sort.key)
                        .map(|c| c.header.clone())
                        .unwrap_or_else(|| sort.key.clone());
                    self.status
                        .info(format!("Sorted by {} ({})", header, sort.direction));
                }
            }
            _ => {
                self.table_view.handle_command(command, &mut self.table);
            }
        }
    }

    fn handle_filter_action(&mut self, action: FilterAction) {
        match action {
            FilterAction::Changed(text) => self.table.set_filter_text(text),
            FilterAction::Done => {
                debug!(filter = %self.filter.value(), "Filter applied");
                self.state = AppState::Browsing;
            }
            FilterAction::Cancel => {
                self.table.set_filter_text("");
                self.state = AppState::Browsing;
            }
        }
    }

    fn handle_paste(&mut self, text: &str) {
        if self.state != AppState::Filtering {
            return;
        }
        let line = text.lines().next().unwrap_or_default();
        self.filter.insert_str(line);
        self.table.set_filter_text(self.filter.value());
    }

    fn reset_selection(&mut self) {
        self.reset_counter += 1;
        info!(trigger = self.reset_counter, "Resetting selection");
        self.table.sync_reset_trigger(&self.reset_counter);
        self.status.info("Selection reset");
    }

    fn quit(&mut self) {
        info!("Quit requested");
        self.state = AppState::Exiting;
    }

    // ========================================================================
    // View
    // ========================================================================

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let show_filter = self.table.options().show_search_and_filter;

        let mut constraints = vec![Constraint::Length(1)];
        if show_filter {
            constraints.push(Constraint::Length(3));
        }
        constraints.extend([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut next = 0;
        let mut take = || {
            let rect = chunks[next];
            next += 1;
            rect
        };

        self.render_header(frame, take());
        if show_filter {
            self.filter
                .render(frame, take(), self.state == AppState::Filtering, &self.theme);
        }
        self.table_view
            .render(frame, take(), &self.table, &self.theme);
        render_pagination(frame, take(), &self.table, &self.theme);
        self.status.render(frame, take(), &self.theme);

        let context = match self.state {
            AppState::Filtering => KeyContext::Filter,
            AppState::Help | AppState::Detail => KeyContext::Popup,
            _ => KeyContext::Table,
        };
        let multiple = self.table.selection_mode() == SelectionMode::Multiple;
        render_context_help(frame, take(), context, multiple, &self.theme);

        match self.state {
            AppState::Help => self.help.render(frame, centered_rect(60, 70, area), &self.theme),
            AppState::Detail => self.render_detail(frame, centered_rect(60, 60, area)),
            _ => {}
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mode = match self.table.selection_mode() {
            SelectionMode::Single => "single selection",
            SelectionMode::Multiple => "multiple selection",
        };
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("· {}", mode), self.theme.dim()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        let Some(id) = self.detail.row_id() else {
            return;
        };
        if let Some(row) = self.table.rows().iter().find(|r| r.id() == id) {
            self.detail
                .render(frame, area, self.table.columns(), row, &self.theme);
        }
    }
}
