//! Error types for the recipe API client and the form controller.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the detail and form screens
//! distinguish "the recipe does not exist" from "the server returned an
//! unexpected status." Every other non-2xx response lands in `HttpError`
//! with the raw status code and body for diagnostics.

use thiserror::Error;

/// Errors returned by `RecipeClient` parse methods and `RecipeService`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response (connection, DNS, TLS...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// A page request with `limit == 0`, or a page whose offset does not fit
    /// in a `u32`.
    #[error("invalid pagination: limit must be greater than zero and the offset must fit in u32")]
    InvalidPagination,
}

/// Rejections raised by the recipe form before anything is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required text input was left empty.
    #[error("required field is empty: {0}")]
    Required(String),

    /// A numeric input holds something other than a non-negative integer.
    #[error("{field} must be a non-negative integer, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// The last ingredient/instruction entry cannot be removed.
    #[error("cannot remove the last {0} entry")]
    LastEntry(&'static str),

    /// No entry exists at the given index.
    #[error("no {list} entry at index {index}")]
    IndexOutOfRange { list: &'static str, index: usize },
}
