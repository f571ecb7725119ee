//! Theme and styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Dimmed text (hints, empty states, disabled controls).
    pub muted: Color,
    /// Column headers and key hints.
    pub accent: Color,
    /// Cursor row background.
    pub highlight: Color,
    /// Checked rows and success messages.
    pub selected: Color,
    /// Filter matches and warnings.
    pub warning: Color,
}

impl Theme {
    /// The dark theme.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            muted: Color::DarkGray,
            accent: Color::Cyan,
            highlight: Color::DarkGray,
            selected: Color::Green,
            warning: Color::Yellow,
        }
    }

    /// The light theme.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            muted: Color::Gray,
            accent: Color::Blue,
            highlight: Color::LightBlue,
            selected: Color::Green,
            warning: Color::Magenta,
        }
    }

    /// Look up a theme by name, falling back to dark.
    pub fn named(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Style for column headers.
    pub fn header(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for the row under the cursor.
    pub fn cursor(&self) -> Style {
        Style::default().bg(self.highlight).add_modifier(Modifier::BOLD)
    }

    /// Style for dimmed text.
    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for highlighted filter matches.
    pub fn matched(&self) -> Style {
        Style::default()
            .bg(self.warning)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
