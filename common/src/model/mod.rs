//! Domain models

pub mod account;
pub mod statement;
