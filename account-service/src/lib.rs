//! Account service for managing customer accounts and their statements

pub mod service;
pub mod repository;
pub mod config;

pub use service::AccountService;
pub use repository::{AccountRepository, InMemoryAccountRepository};
pub use config::AccountServiceConfig;
