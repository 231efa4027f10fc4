//! Statement API handlers
//!
//! Deposits, withdrawals, the statement itself and the derived balance.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use common::decimal::{json_number, Amount};
use common::model::statement::Operation;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::customer::Customer;
use crate::error::{ApiError, ErrorResponse};
use crate::AppState;

/// Full statement of the account
#[utoipa::path(
    get,
    path = "/statement",
    params(
        ("cpf" = String, Header, description = "Customer identifier; the header name is set by IDENTIFIER_HEADER and defaults to cpf")
    ),
    responses(
        (status = 200, description = "Statement in chronological order", body = Vec<Operation>),
        (status = 400, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "statement"
)]
pub async fn get_statement(
    State(state): State<Arc<AppState>>,
    Customer(account): Customer,
) -> Json<Vec<Operation>> {
    Json(state.account_service.get_statement(&account).await)
}

/// Statement date filter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatementDateQuery {
    /// Calendar day, formatted YYYY-MM-DD
    #[param(value_type = String, example = "2024-01-01")]
    pub date: NaiveDate,
}

/// Operations recorded on a calendar day
#[utoipa::path(
    get,
    path = "/statement/date",
    params(
        ("cpf" = String, Header, description = "Customer identifier; the header name is set by IDENTIFIER_HEADER and defaults to cpf"),
        StatementDateQuery
    ),
    responses(
        (status = 200, description = "Operations of the given day", body = Vec<Operation>),
        (status = 400, description = "Customer not found or malformed date", body = ErrorResponse)
    ),
    tag = "statement"
)]
pub async fn get_statement_by_date(
    State(state): State<Arc<AppState>>,
    Customer(account): Customer,
    query: Result<Query<StatementDateQuery>, QueryRejection>,
) -> Result<Json<Vec<Operation>>, ApiError> {
    let Query(query) = query?;
    Ok(Json(state.account_service.get_statement_by_date(&account, query.date).await))
}

/// Derived balance of the account
#[utoipa::path(
    get,
    path = "/balance",
    params(
        ("cpf" = String, Header, description = "Customer identifier; the header name is set by IDENTIFIER_HEADER and defaults to cpf")
    ),
    responses(
        (status = 200, description = "Credits minus debits", body = BalanceResponse),
        (status = 400, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "statement"
)]
pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    Customer(account): Customer,
) -> Result<Json<BalanceResponse>, ApiError> {
    let balance = state.account_service.get_balance(&account).await?;
    Ok(Json(BalanceResponse(balance)))
}

/// Balance body: a bare JSON number
#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct BalanceResponse(
    #[serde(serialize_with = "json_number::serialize")]
    #[schema(value_type = f64)]
    pub Amount,
);

/// Deposit request
#[derive(Debug, Deserialize, ToSchema)]
pub struct DepositRequest {
    /// Free text shown on the statement
    #[serde(default)]
    pub description: Option<String>,
    /// Amount
    #[serde(deserialize_with = "json_number::deserialize")]
    #[schema(value_type = f64)]
    pub amount: Amount,
}

/// Credit the account
#[utoipa::path(
    post,
    path = "/deposit",
    params(
        ("cpf" = String, Header, description = "Customer identifier; the header name is set by IDENTIFIER_HEADER and defaults to cpf")
    ),
    request_body = DepositRequest,
    responses(
        (status = 201, description = "Credit appended"),
        (status = 400, description = "Customer not found or invalid amount", body = ErrorResponse)
    ),
    tag = "statement"
)]
pub async fn deposit(
    State(state): State<Arc<AppState>>,
    Customer(account): Customer,
    payload: Result<Json<DepositRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    state.account_service.deposit(&account, request.description.as_deref(), request.amount).await?;

    Ok(StatusCode::CREATED)
}

/// Withdraw request
#[derive(Debug, Deserialize, ToSchema)]
pub struct WithdrawRequest {
    /// Amount
    #[serde(deserialize_with = "json_number::deserialize")]
    #[schema(value_type = f64)]
    pub amount: Amount,
}

/// Debit the account
#[utoipa::path(
    post,
    path = "/withdraw",
    params(
        ("cpf" = String, Header, description = "Customer identifier; the header name is set by IDENTIFIER_HEADER and defaults to cpf")
    ),
    request_body = WithdrawRequest,
    responses(
        (status = 201, description = "Debit appended"),
        (status = 400, description = "Customer not found, invalid amount or insufficient funds", body = ErrorResponse)
    ),
    tag = "statement"
)]
pub async fn withdraw(
    State(state): State<Arc<AppState>>,
    Customer(account): Customer,
    payload: Result<Json<WithdrawRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    state.account_service.withdraw(&account, request.amount).await?;

    Ok(StatusCode::CREATED)
}
