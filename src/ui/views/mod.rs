//! Application views (popups over the table).

mod detail;
mod help;

pub use detail::{DetailAction, DetailView};
pub use help::{HelpAction, HelpView};
