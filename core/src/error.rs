//! Error types for the item API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the item does not exist" from "the server returned an unexpected status."
//! All other non-2xx responses land in `Status` with the raw status code and
//! body for debugging. `Transport` carries failures that happened before any
//! status line was read.

use thiserror::Error;

/// Errors returned by `ItemClient` parse methods and `Transport` implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout,
    /// broken body stream).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// How a failed list refresh is reported to the user.
///
/// Only the list path distinguishes causes; mutations collapse every failure
/// into one generic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFailure {
    /// Transport failure or non-2xx status.
    Request,
    /// The body was not a valid item array.
    Json,
    /// Anything else.
    Unexpected,
}

impl ApiError {
    pub fn list_failure(&self) -> ListFailure {
        match self {
            ApiError::Transport(_) | ApiError::NotFound | ApiError::Status { .. } => {
                ListFailure::Request
            }
            ApiError::Deserialization(_) => ListFailure::Json,
            ApiError::Serialization(_) => ListFailure::Unexpected,
        }
    }
}

/// Errors raised while reading the form's text inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Invalid item id: '{0}'")]
    InvalidId(String),
}

/// Outcome of a form handler: either the inputs were rejected before any
/// request went out, or the request itself failed.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
