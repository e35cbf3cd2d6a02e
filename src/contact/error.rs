use thiserror::Error;

use super::form::{Field, Status};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("unknown country code '{0}'")]
    UnknownCountryCode(String),

    #[error("a submission is already {0}")]
    Busy(Status),

    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: Status, to: Status },

    #[error("failed to encode form data: {0}")]
    Encoding(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("Failed to submit: {status} {reason}")]
    Rejected { status: u16, reason: String },
}

impl ContactError {
    /// Errors raised before anything left the browser.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ContactError::MissingField(_)
                | ContactError::InvalidEmail(_)
                | ContactError::UnknownCountryCode(_)
        )
    }
}
