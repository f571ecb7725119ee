//! pigpen - selectable data tables for the farm back office.
//!
//! The core is [`table::SelectableTable`], a filterable, sortable, paginated
//! table with single or multiple row selection. Around it sit JSON datasets,
//! the built-in farm record sets, configuration and a terminal frontend.

pub mod app;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod events;
pub mod farm;
pub mod logging;
pub mod report;
pub mod table;
pub mod tui;
pub mod ui;

pub use error::{AppError, Result};
