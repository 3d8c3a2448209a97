//! Error types for account name validation.

use thiserror::Error;

/// Errors produced when a string is required to be a valid account name.
///
/// The structural operations in [`crate::ops`] never fail; only the
/// validating entry points (`validate_*`, [`crate::Account`] construction)
/// return these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// The full account name does not follow the account grammar.
    #[error("invalid account name: {name:?}: {reason}")]
    InvalidAccountName { name: String, reason: String },

    /// A single component does not follow the component grammar.
    #[error("invalid account component: {component:?}: {reason}")]
    InvalidComponent { component: String, reason: String },
}

/// Convenience type alias for account operations.
pub type Result<T> = std::result::Result<T, AccountError>;
