//! Error Types
//!
//! Every failure the controllers can report to a view.

use thiserror::Error;

/// Failure talking to the scoring or analysis service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("service responded with status {code}")]
    Status { code: u16 },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ServiceError::Status { code: status.as_u16() }
        } else if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    #[error("no item with ordinal {0}")]
    UnknownItem(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a submission is already pending")]
    InFlight,
    #[error("could not compute scores: {0}")]
    Service(#[from] ServiceError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error("no text to analyze")]
    EmptyInput,
    #[error("an analysis is already pending")]
    InFlight,
    #[error("could not analyze text: {0}")]
    Service(#[from] ServiceError),
}
