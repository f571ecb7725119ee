//! Contextual help bar component.
//!
//! Displays context-sensitive keyboard shortcut hints at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::Theme;

/// Which part of the screen has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Table,
    Filter,
    Popup,
}

/// Hint text for a context. Keys are written in brackets.
pub fn context_hints(context: KeyContext, multiple: bool) -> &'static str {
    match (context, multiple) {
        (KeyContext::Table, true) => {
            "[j/k] move  [h/l] column  [s] sort  [space] toggle  [a] page  [n/p] page  [/] filter  [?] help  [q] quit"
        }
        (KeyContext::Table, false) => {
            "[j/k] move  [h/l] column  [s] sort  [space] select  [n/p] page  [/] filter  [?] help  [q] quit"
        }
        (KeyContext::Filter, _) => "[Enter] apply  [Esc] clear  [Ctrl+U] erase",
        (KeyContext::Popup, _) => "[Esc/q] close",
    }
}

/// Render a contextual help bar with hints for the given context.
pub fn render_context_help(
    frame: &mut Frame,
    area: Rect,
    context: KeyContext,
    multiple: bool,
    theme: &Theme,
) {
    let spans = parse_hints_to_spans(context_hints(context, multiple), theme);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Parse hint text into styled spans.
///
/// Highlights the key portion (in brackets) differently from the description.
fn parse_hints_to_spans(hints: &str, theme: &Theme) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme.accent);
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut in_bracket = false;

    for c in hints.chars() {
        match c {
            '[' => {
                if !current.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut current), theme.dim()));
                }
                in_bracket = true;
                current.push(c);
            }
            ']' => {
                current.push(c);
                if in_bracket {
                    spans.push(Span::styled(std::mem::take(&mut current), key_style));
                    in_bracket = false;
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        spans.push(Span::styled(current, theme.dim()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hints_to_spans_simple() {
        let spans = parse_hints_to_spans("[j/k] move", &Theme::dark());
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "[j/k]");
    }

    #[test]
    fn test_parse_hints_to_spans_multiple_keys() {
        let spans = parse_hints_to_spans("[j/k] move  [Enter] open  [?] help", &Theme::dark());
        assert_eq!(spans.len(), 6);
    }

    #[test]
    fn test_parse_hints_to_spans_empty() {
        assert!(parse_hints_to_spans("", &Theme::dark()).is_empty());
    }

    #[test]
    fn test_select_all_hint_only_in_multiple_mode() {
        assert!(context_hints(KeyContext::Table, true).contains("[a]"));
        assert!(!context_hints(KeyContext::Table, false).contains("[a]"));
    }
}
