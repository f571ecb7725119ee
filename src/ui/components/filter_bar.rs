//! Filter bar component.
//!
//! An editable line of filter text above the table. While focused every edit
//! is reported so the table can refilter as the user types; match
//! highlighting for table cells lives here too.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;

/// Outcome of a key press in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// The text changed.
    Changed(String),
    /// Editing finished, keep the text.
    Done,
    /// Editing finished, text cleared.
    Cancel,
}

/// Editable filter text with a character cursor.
#[derive(Debug, Clone, Default)]
pub struct FilterInput {
    /// Current text.
    value: String,
    /// Cursor position, counted in characters.
    cursor: usize,
}

impl FilterInput {
    /// Create an empty filter input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Clear the text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert `text` at the cursor and move the cursor past it.
    pub fn insert_str(&mut self, text: &str) {
        let at = self.byte_index(self.cursor);
        self.value.insert_str(at, text);
        self.cursor += text.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Handle a key press while the bar is focused.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<FilterAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => Some(FilterAction::Done),
            (KeyCode::Esc, _) => {
                self.clear();
                Some(FilterAction::Cancel)
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if self.value.is_empty() {
                    return None;
                }
                self.clear();
                Some(FilterAction::Changed(String::new()))
            }
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
                if self.cursor == 0 {
                    return None;
                }
                let end = self.byte_index(self.cursor);
                let before = &self.value[..end];
                let start = before
                    .trim_end()
                    .char_indices()
                    .rev()
                    .find(|(_, c)| !c.is_alphanumeric())
                    .map(|(i, c)| i + c.len_utf8())
                    .unwrap_or(0);
                self.cursor -= self.value[start..end].chars().count();
                self.value.replace_range(start..end, "");
                Some(FilterAction::Changed(self.value.clone()))
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                Some(FilterAction::Changed(self.value.clone()))
            }
            (KeyCode::Backspace, _) => {
                if self.cursor == 0 {
                    return None;
                }
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                Some(FilterAction::Changed(self.value.clone()))
            }
            (KeyCode::Delete, _) => {
                if self.cursor >= self.char_len() {
                    return None;
                }
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                Some(FilterAction::Changed(self.value.clone()))
            }
            (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                None
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                None
            }
            (KeyCode::End, _) => {
                self.cursor = self.char_len();
                None
            }
            _ => None,
        }
    }

    /// Render the filter bar.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let (text, style) = if self.value.is_empty() && !focused {
            ("Press / to filter".to_string(), theme.dim())
        } else {
            (self.value.clone(), Style::default().fg(theme.fg))
        };

        let border_style = if focused {
            Style::default().fg(theme.warning)
        } else {
            theme.dim()
        };

        let widget = Paragraph::new(text).style(style).block(
            Block::default()
                .title(" Filter ")
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(widget, area);

        if focused {
            let offset = u16::try_from(self.cursor).unwrap_or(u16::MAX);
            let cursor_x = area.x.saturating_add(1).saturating_add(offset);
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
            }
        }
    }
}

/// Highlight case-insensitive occurrences of `query` in `text`.
///
/// Matching is done per character so multi-byte text never splits.
pub fn highlight_text(text: &str, query: &str, base: Style, matched: Style) -> Line<'static> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    let chars: Vec<char> = text.chars().collect();
    let folded: Vec<char> = chars.iter().map(|&c| fold(c)).collect();

    if needle.is_empty() || needle.len() != query.chars().count() || needle.len() > chars.len() {
        return Line::from(Span::styled(text.to_string(), base));
    }

    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    while i + needle.len() <= folded.len() {
        if folded[i..i + needle.len()] == needle[..] {
            if i > plain_start {
                spans.push(Span::styled(chars[plain_start..i].iter().collect::<String>(), base));
            }
            spans.push(Span::styled(
                chars[i..i + needle.len()].iter().collect::<String>(),
                matched,
            ));
            i += needle.len();
            plain_start = i;
        } else {
            i += 1;
        }
    }

    if plain_start < chars.len() {
        spans.push(Span::styled(chars[plain_start..].iter().collect::<String>(), base));
    }

    Line::from(spans)
}

fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
