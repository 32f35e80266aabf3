//! Resolver error types

use thiserror::Error;

/// Failure while resolving configuration from the key-value store.
///
/// The environment and command-line stages cannot fail; every variant here
/// comes from the store stage, and any of them aborts the whole resolution.
/// Callers never receive a partial mapping alongside an error.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The range query returned a non-success HTTP status.
    #[error("key-value store range query failed with status {status}")]
    Status {
        /// HTTP status code returned by the store.
        status: u16,
    },

    /// The range query could not be performed at all.
    #[error("key-value store unreachable: {0}")]
    Transport(String),

    /// The store response could not be decoded (malformed JSON, base64,
    /// or non-UTF-8 key/value bytes).
    #[error("malformed store response: {0}")]
    Decode(String),
}
