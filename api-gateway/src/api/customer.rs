//! Customer resolution for requests addressed to an existing account
//!
//! Handlers that take a [`Customer`] never run unless the identifier header
//! names a stored account: the extractor rejects the request first.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use common::error::Error;
use common::model::account::CustomerAccount;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

/// Account resolved from the request's identifier header
#[derive(Debug, Clone)]
pub struct Customer(pub CustomerAccount);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for Customer {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let identifier = parts
            .headers
            .get(&state.identifier_header)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                Error::CustomerNotFound(format!("Missing {} header", state.identifier_header))
            })?;

        let account = state.account_service.resolve(identifier).await?;
        debug!("Resolved customer {} to account {}", identifier, account.account_id);

        Ok(Customer(account))
    }
}
