use std::fmt;

use thiserror::Error;

/// The user action a transport failure interrupted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Search { url: String },
    LoadReviews { url: String },
    SubmitReview,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Search { url } => write!(f, "searching with url: {url}"),
            Operation::LoadReviews { url } => write!(f, "loading reviews with URL: {url}"),
            Operation::SubmitReview => f.write_str("submitting review"),
        }
    }
}

/// Failures surfaced to the person using the page. `Display` is the message they see.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network unreachable or a body that is not the expected JSON.
    #[error("An error occurred while {operation}")]
    Transport { operation: Operation, detail: String },

    /// `success: false` from the backend.
    #[error("{0}")]
    Upstream(String),

    /// Rejected locally before any request was made.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn transport(operation: Operation, err: impl fmt::Display) -> Self {
        ApiError::Transport {
            operation,
            detail: err.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("{key} must be an http(s) URL, got {value:?}")]
    InvalidUrl { key: &'static str, value: String },

    #[error("{key} is not a valid number: {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}
