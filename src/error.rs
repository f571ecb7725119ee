//! Top-level error type.
//!
//! Module errors ([`ConfigError`], [`DatasetError`]) convert into
//! [`AppError`] with `?`; `main` turns it into a message, a hint and an exit
//! code.

use thiserror::Error;

use crate::config::ConfigError;
use crate::dataset::DatasetError;

/// Any failure that ends a pigpen command.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Dataset(#[from] DatasetError),

    /// Writing to stdout or a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Raw mode, the alternate screen or drawing failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// One sentence for stderr, without source chains.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => config_message(e),
            AppError::Dataset(e) => dataset_message(e),
            AppError::Io(_) => "Could not write output.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Errors that mean the input or environment is unusable, as opposed to
    /// a failure partway through a run.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            AppError::Config(_) | AppError::Dataset(_) | AppError::Terminal(_)
        )
    }

    /// What the user can do about it, when there is something.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ParseError(_) | ConfigError::ValidationError(_)) => {
                Some("Run 'pigpen config' to see the effective settings and the file location.")
            }
            AppError::Dataset(DatasetError::UnknownRecordSet(_)) => {
                Some("Use one of: pigs, groups, suppliers, movements.")
            }
            AppError::Dataset(DatasetError::MissingId(_) | DatasetError::DuplicateId(_)) => {
                Some("Every row needs a unique string or number 'id' field.")
            }
            _ => None,
        }
    }
}

fn config_message(e: &ConfigError) -> String {
    match e {
        ConfigError::NoConfigDir => "This platform has no configuration directory.".to_string(),
        ConfigError::CreateDirError(_) | ConfigError::WriteError(_) => {
            "Could not write the configuration file.".to_string()
        }
        ConfigError::ReadError(_) => "Could not read the configuration file.".to_string(),
        ConfigError::ParseError(_) => "The configuration file is not valid TOML.".to_string(),
        ConfigError::SerializeError(_) => "Could not encode the configuration.".to_string(),
        ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
    }
}

fn dataset_message(e: &DatasetError) -> String {
    match e {
        DatasetError::Read { path, .. } => format!("Could not read dataset '{}'.", path.display()),
        DatasetError::Parse(_) => "Dataset file is not valid JSON for a table.".to_string(),
        DatasetError::NoColumns => "Dataset defines no columns.".to_string(),
        DatasetError::MissingId(row) => format!("Row {} of the dataset has no id.", row),
        DatasetError::DuplicateId(id) => format!("Dataset contains the id '{}' more than once.", id),
        DatasetError::UnknownRecordSet(name) => {
            format!("There is no built-in record set called '{}'.", name)
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;
