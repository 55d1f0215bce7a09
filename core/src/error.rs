//! Error types for the arguments API client.
//!
//! # Design
//! `ValidationError` is raised locally, before any request leaves the client.
//! `ApiError` wraps it together with the status-derived failures: `NotFound`
//! (404 on update only; lookups map 404 to an empty result), `Server` for any
//! 500, and `UnexpectedStatus` for everything the operation does not expect.

use thiserror::Error;

/// A payload or query rejected before the network is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Can't get arguments with an empty conclusion.")]
    EmptyConclusionQuery,

    #[error("An argument must have a conclusion.")]
    MissingConclusion,

    #[error("An argument must have at least two premises.")]
    TooFewPremises,

    /// Carries the first premise seen twice.
    #[error("Arguments shouldn't use the same premise more than once. Yours repeats: {0}")]
    DuplicatePremise(String),
}

/// Failure reported by a `Transport` before any HTTP status was received.
#[derive(Error, Debug)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError(err.to_string())
    }
}

/// Errors returned by `ArgumentsClient` and `ArgumentsApi`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 404 on update: the argument being updated does not exist.
    #[error("The server returned a 404: {0}.")]
    NotFound(String),

    #[error("The server responded with a 500: {0}")]
    Server(String),

    #[error("The server responded with an unexpected {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// 201/204 without a `Location` header.
    #[error("The server responded with a {0} but no Location header")]
    MissingLocation(u16),

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
