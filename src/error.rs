//! Error types surfaced by listing calls and record mapping.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by this crate.
///
/// Nothing is retried or recovered internally; every failure surfaces
/// synchronously to the caller of the listing operation that triggered it.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure talking to the RDS endpoint.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Status {
        /// HTTP status returned by the service.
        status: StatusCode,
        /// Response body, usually the service's error document.
        body: String,
    },

    /// The response body did not match the documented envelope.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// A raw record lacks a field the mapper requires.
    #[error("record is missing required field `{field}`")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// A raw record field holds a value of an undocumented type.
    #[error("record field `{field}` is not {expected}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Description of the documented type.
        expected: &'static str,
    },

    /// A required environment variable is not set.
    #[error("{0} environment variable not set")]
    MissingEnv(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
