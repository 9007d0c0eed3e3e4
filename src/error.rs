use crate::models::Category;

/// Rejected edits to the search criteria
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("search is locked to {locked} while suburbs are selected, cannot add {attempted}")]
    CategoryLocked { locked: Category, attempted: Category },
}

/// Failures talking to the autocomplete endpoint
#[derive(Debug, thiserror::Error)]
pub enum AutocompleteError {
    #[error("autocomplete request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("autocomplete endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid autocomplete payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("invalid autocomplete URL: {0}")]
    Url(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}
