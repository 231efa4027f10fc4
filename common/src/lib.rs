//! Common types and utilities for the ledger service
//!
//! This library contains shared types used across the account service and
//! the API gateway: the error type, monetary decimals and the domain models
//! for customer accounts and their statements.

pub mod error;
pub mod model;
pub mod decimal;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use decimal::*;

// Re-export utoipa for use in model ToSchema derives
#[cfg(feature = "utoipa")]
pub use utoipa;
