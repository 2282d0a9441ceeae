//! Client error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// An edit draft reached submission without an employee id.
    /// This is a logic defect, never a user error.
    #[error("Error in editing existing employee data - no id provided to submit handler")]
    MissingId,

    #[error("Form has invalid fields: {0}")]
    InvalidForm(String),

    #[error("Nothing to submit")]
    SubmitDisabled,

    #[error("Employee {0} is not being edited")]
    NotEditing(String),

    #[error("Add employee form is not open")]
    AddFormHidden,

    #[error("Unknown employee: {0}")]
    UnknownEmployee(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
