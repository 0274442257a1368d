//! Error type shared by every module in postopia-core.

use thiserror::Error;

/// Errors surfaced by category lookup and configuration loading.
#[derive(Error, Debug)]
pub enum Error {
    /// The input matched none of the four search category labels.
    #[error("unknown search category: {}", display_input(.input))]
    InvalidCategory { input: Option<String> },

    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(u32),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_category(input: Option<&str>) -> Self {
        Error::InvalidCategory {
            input: input.map(str::to_owned),
        }
    }
}

fn display_input(input: &Option<String>) -> String {
    match input {
        Some(text) => format!("{text:?}"),
        None => "<none>".to_string(),
    }
}
