//! Configuration sections.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::table::{SelectionMode, TableOptions, DEFAULT_ROWS_PER_PAGE};

/// Defaults applied to every table the application opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Rows shown on each page.
    pub rows_per_page: usize,
    /// Single or multiple selection.
    pub selection_mode: SelectionMode,
    /// Whether the filter input is available.
    pub show_search_and_filter: bool,
    /// Whether rows are split into pages.
    pub show_pagination: bool,
}

impl TableSettings {
    /// Validate the table settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `rows_per_page` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.rows_per_page == 0 {
            return Err(ConfigError::ValidationError(
                "table.rows_per_page must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Table options built from these settings.
    pub fn to_options(&self) -> TableOptions {
        TableOptions {
            selection_mode: self.selection_mode,
            show_search_and_filter: self.show_search_and_filter,
            rows_per_page: self.rows_per_page,
            show_pagination: self.show_pagination,
            ..TableOptions::default()
        }
    }
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            selection_mode: SelectionMode::Single,
            show_search_and_filter: true,
            show_pagination: true,
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The UI theme to use (`dark` or `light`).
    pub theme: String,
    /// Whether to use vim-style keybindings.
    pub vim_mode: bool,
}

impl UiSettings {
    /// Validate the UI settings.
    pub fn validate(&self) -> Result<()> {
        match self.theme.as_str() {
            "dark" | "light" => Ok(()),
            other => Err(ConfigError::ValidationError(format!(
                "ui.theme '{}' is not supported (expected 'dark' or 'light')",
                other
            ))),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            vim_mode: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_defaults() {
        let settings = TableSettings::default();
        assert_eq!(settings.rows_per_page, 10);
        assert_eq!(settings.selection_mode, SelectionMode::Single);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_rows_per_page_rejected() {
        let settings = TableSettings {
            rows_per_page: 0,
            ..TableSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("rows_per_page"));
    }

    #[test]
    fn test_to_options() {
        let settings = TableSettings {
            rows_per_page: 25,
            selection_mode: SelectionMode::Multiple,
            show_search_and_filter: false,
            show_pagination: false,
        };
        let options = settings.to_options();
        assert_eq!(options.rows_per_page, 25);
        assert_eq!(options.selection_mode, SelectionMode::Multiple);
        assert!(!options.show_search_and_filter);
        assert!(!options.show_pagination);
        assert!(!options.disabled);
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let ui = UiSettings {
            theme: "neon".to_string(),
            vim_mode: false,
        };
        assert!(ui.validate().is_err());
        assert!(UiSettings::default().validate().is_ok());
    }
}
