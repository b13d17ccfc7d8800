//! Error types for container operations.
//!
//! Precondition violations are programmer errors: they fail the offending
//! call and leave the container in its last valid state, but nothing here is
//! a recoverable runtime condition to branch on.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by container and host operations.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A widget was added while it still had a parent.
    #[error("already parented")]
    AlreadyParented(String),

    /// A widget was removed from a container that is not its parent.
    #[error("not a child")]
    NotAChild(String),

    /// The hosting framework rejected an operation.
    #[error("host")]
    Host(String),
}
