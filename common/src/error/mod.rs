//! Error types for the ledger service
//!
//! This module provides a unified error handling system shared by the
//! account service and the API gateway. Domain failures carry the message
//! that is ultimately shown to the caller.

use std::fmt::Display;
use thiserror::Error;

/// Ledger error type
#[derive(Debug, Error)]
pub enum Error {
    /// No account is registered for the given identifier
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// An account already exists for the given identifier
    #[error("Customer already exists: {0}")]
    DuplicateAccount(String),

    /// A withdrawal exceeds the derived balance
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    /// Malformed amount, date, name or identifier
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Decimal arithmetic error
    #[error("Decimal arithmetic error: {0}")]
    DecimalError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::CustomerNotFound(msg) => Error::CustomerNotFound(format!("{}: {}", context, msg)),
                Error::DuplicateAccount(msg) => Error::DuplicateAccount(format!("{}: {}", context, msg)),
                Error::InsufficientFunds(msg) => Error::InsufficientFunds(format!("{}: {}", context, msg)),
                Error::InvalidInput(msg) => Error::InvalidInput(format!("{}: {}", context, msg)),
                Error::ConfigurationError(msg) => Error::ConfigurationError(format!("{}: {}", context, msg)),
                Error::Internal(msg) => Error::Internal(format!("{}: {}", context, msg)),
                Error::DecimalError(msg) => Error::DecimalError(format!("{}: {}", context, msg)),
            }
        })
    }
}

impl Error {
    /// Message shown to API callers for this error kind
    pub fn public_message(&self) -> &'static str {
        match self {
            Error::CustomerNotFound(_) => "Customer not found!",
            Error::DuplicateAccount(_) => "Customer already exists!",
            Error::InsufficientFunds(_) => "Insufficient funds!",
            Error::InvalidInput(_) => "Invalid input!",
            Error::ConfigurationError(_)
            | Error::Internal(_)
            | Error::DecimalError(_) => "Internal server error!",
        }
    }

    /// Whether the error was caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::CustomerNotFound(_)
                | Error::DuplicateAccount(_)
                | Error::InsufficientFunds(_)
                | Error::InvalidInput(_)
        )
    }
}
