//! Account API handlers
//!
//! Handles endpoints related to account management:
//! - Create account
//! - Get account details
//! - Rename account
//! - Delete account

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use common::model::account::CustomerAccount;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::customer::Customer;
use crate::error::{ApiError, ErrorResponse};
use crate::AppState;

/// Create account request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    /// Customer identifier (CPF)
    pub identifier: String,
    /// Display name
    pub name: String,
}

/// Create a new account
#[utoipa::path(
    post,
    path = "/account",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account successfully created"),
        (status = 400, description = "Customer already exists or invalid input", body = ErrorResponse)
    ),
    tag = "account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    state.account_service.create_account(&request.identifier, &request.name).await?;

    Ok(StatusCode::CREATED)
}

/// Get the account addressed by the identifier header
#[utoipa::path(
    get,
    path = "/account",
    params(
        ("cpf" = String, Header, description = "Customer identifier; the header name is set by IDENTIFIER_HEADER and defaults to cpf")
    ),
    responses(
        (status = 200, description = "Account details retrieved successfully", body = CustomerAccount),
        (status = 400, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Customer(account): Customer,
) -> Json<CustomerAccount> {
    Json(state.account_service.get_account(&account).await)
}

/// Rename account request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAccountRequest {
    /// New display name
    pub name: String,
}

/// Replace the account's display name
#[utoipa::path(
    put,
    path = "/account",
    params(
        ("cpf" = String, Header, description = "Customer identifier; the header name is set by IDENTIFIER_HEADER and defaults to cpf")
    ),
    request_body = UpdateAccountRequest,
    responses(
        (status = 201, description = "Account renamed"),
        (status = 400, description = "Customer not found or invalid input", body = ErrorResponse)
    ),
    tag = "account"
)]
pub async fn update_account(
    State(state): State<Arc<AppState>>,
    Customer(account): Customer,
    payload: Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    state.account_service.update_name(&account, &request.name).await?;

    Ok(StatusCode::CREATED)
}

/// Delete the account addressed by the identifier header
#[utoipa::path(
    delete,
    path = "/account",
    params(
        ("cpf" = String, Header, description = "Customer identifier; the header name is set by IDENTIFIER_HEADER and defaults to cpf")
    ),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 400, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "account"
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Customer(account): Customer,
) -> Result<StatusCode, ApiError> {
    state.account_service.delete_account(&account).await?;

    Ok(StatusCode::OK)
}
