//! Key binding definitions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An action in the table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the row cursor up.
    Up,
    /// Move the row cursor down.
    Down,
    /// Move the column cursor left.
    Left,
    /// Move the column cursor right.
    Right,
    /// Jump to the first row of the page.
    FirstRow,
    /// Jump to the last row of the page.
    LastRow,
    /// Show the next page.
    NextPage,
    /// Show the previous page.
    PrevPage,
    /// Toggle the focused row's checkbox.
    ToggleRow,
    /// Activate (click) the focused row.
    ActivateRow,
    /// Toggle "select all" for the page.
    SelectAll,
    /// Sort by the focused column.
    Sort,
    /// Start editing the filter text.
    Filter,
    /// Clear the filter text.
    ClearFilter,
    /// Bump the reset trigger.
    ResetSelection,
    /// Show or hide the key help.
    Help,
    /// Leave the application.
    Quit,
}

/// Key binding configuration.
pub struct KeyBindings {
    /// Whether vim-style bindings are enabled.
    pub vim_mode: bool,
}

impl KeyBindings {
    /// Create new key bindings.
    pub fn new(vim_mode: bool) -> Self {
        Self { vim_mode }
    }

    /// Map a key press to a table command.
    pub fn resolve(&self, key: KeyEvent) -> Option<Command> {
        let command = match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Command::Quit,
            (KeyCode::Up, _) => Command::Up,
            (KeyCode::Down, _) => Command::Down,
            (KeyCode::Left, _) => Command::Left,
            (KeyCode::Right, _) => Command::Right,
            (KeyCode::Home, _) => Command::FirstRow,
            (KeyCode::End, _) => Command::LastRow,
            (KeyCode::PageDown, _) => Command::NextPage,
            (KeyCode::PageUp, _) => Command::PrevPage,
            (KeyCode::Enter, _) => Command::ActivateRow,
            (KeyCode::Esc, _) => Command::ClearFilter,
            (KeyCode::Char(' '), _) => Command::ToggleRow,
            (KeyCode::Char('a'), KeyModifiers::NONE) => Command::SelectAll,
            (KeyCode::Char('s'), KeyModifiers::NONE) => Command::Sort,
            (KeyCode::Char('/'), _) => Command::Filter,
            (KeyCode::Char('n'), KeyModifiers::NONE) => Command::NextPage,
            (KeyCode::Char('p'), KeyModifiers::NONE) => Command::PrevPage,
            (KeyCode::Char('r'), KeyModifiers::NONE) => Command::ResetSelection,
            (KeyCode::Char('?'), _) => Command::Help,
            (KeyCode::Char('q'), KeyModifiers::NONE) => Command::Quit,
            (KeyCode::Char(c), KeyModifiers::NONE) if self.vim_mode => match c {
                'j' => Command::Down,
                'k' => Command::Up,
                'h' => Command::Left,
                'l' => Command::Right,
                'g' => Command::FirstRow,
                'G' => Command::LastRow,
                _ => return None,
            },
            (KeyCode::Char('G'), KeyModifiers::SHIFT) if self.vim_mode => Command::LastRow,
            _ => return None,
        };
        Some(command)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(true)
    }
}
