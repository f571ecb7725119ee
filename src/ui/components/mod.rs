//! Reusable UI components.

mod filter_bar;
mod help_bar;
mod notification;
mod pagination;
mod table;

pub use filter_bar::{highlight_text, FilterAction, FilterInput};
pub use help_bar::{context_hints, render_context_help, KeyContext};
pub use notification::{Notification, NotificationKind, StatusLine};
pub use pagination::{pagination_line, render_pagination};
pub use table::{column_widths, page_marker, row_marker, TableView, EMPTY_MESSAGE, MAX_COLUMN_WIDTH};
