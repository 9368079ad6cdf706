//! Centralized error handling for Bastille Core
//!
//! The error surface here is deliberately narrow. Construction-time misuse
//! (empty policy name, unparseable level name) fails fast through
//! [`PolicyError`]. Runtime failures to apply or verify a mitigation are
//! expected operating conditions, not errors: concrete policies report them
//! through the boolean returns of `enforce`/`matches_system`.

use thiserror::Error;

/// Errors from constructing or configuring mitigation policies.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// A policy was constructed with an empty name
    #[error("policy name must not be empty")]
    EmptyName,

    /// An enforcement level name did not match any known level
    #[error("unknown enforcement level: {0}")]
    UnknownLevel(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for policy construction and configuration operations.
pub type PolicyResult<T> = Result<T, PolicyError>;
