//! Ledger service metapackage
//!
//! Re-exports the workspace crates so cross-crate tests can reach them
//! through a single dependency.

pub use account_service;
pub use api_gateway;
pub use common;
