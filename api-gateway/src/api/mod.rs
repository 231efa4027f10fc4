//! API handlers
//!
//! This module contains all the API endpoint handlers organized by resource.
//! Each handler follows a consistent pattern:
//! - Resolve the customer through the [`customer::Customer`] extractor
//! - Extract state and payload using Axum extractors
//! - Call the appropriate service method
//! - Map the result to a status code or JSON body

pub mod account;
pub mod courses;
pub mod customer;
pub mod statement;
