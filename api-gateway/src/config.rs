//! Application configuration

use std::env;

use account_service::AccountServiceConfig;
use axum::http::HeaderName;
use common::error::{Error, Result};

/// Header carrying the customer identifier unless overridden
pub const DEFAULT_IDENTIFIER_HEADER: &str = "cpf";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API port
    pub port: u16,
    /// Header used to resolve the customer of a request
    pub identifier_header: HeaderName,
    /// Verbose logging
    pub debug: bool,
    /// Account service settings
    pub account_service: AccountServiceConfig,
}

impl AppConfig {
    /// Create a new configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let header = env::var("IDENTIFIER_HEADER").unwrap_or_else(|_| DEFAULT_IDENTIFIER_HEADER.to_string());
        let identifier_header = parse_identifier_header(&header)?;

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3333),
            identifier_header,
            debug: env::var("DEBUG").map(|v| v == "1").unwrap_or(false),
            account_service: AccountServiceConfig::from_env(),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3333,
            identifier_header: HeaderName::from_static(DEFAULT_IDENTIFIER_HEADER),
            debug: false,
            account_service: AccountServiceConfig::new(false),
        }
    }
}

/// Parse a header name, case-insensitively
pub fn parse_identifier_header(header: &str) -> Result<HeaderName> {
    HeaderName::try_from(header.trim().to_ascii_lowercase())
        .map_err(|e| Error::ConfigurationError(format!("Invalid IDENTIFIER_HEADER {:?}: {}", header, e)))
}
