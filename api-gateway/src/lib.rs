//! HTTP surface of the ledger service

pub mod api;
pub mod config;
pub mod error;

use std::sync::Arc;

use account_service::AccountService;
use axum::{
    http::HeaderName,
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    account::{create_account, delete_account, get_account, update_account},
    courses::{create_course, delete_course, list_courses, patch_course, replace_course},
    statement::{deposit, get_balance, get_statement, get_statement_by_date, withdraw},
};
use crate::config::AppConfig;

/// App state shared across handlers
pub struct AppState {
    /// Account service
    pub account_service: Arc<AccountService>,
    /// Header carrying the customer identifier
    pub identifier_header: HeaderName,
}

impl AppState {
    /// Build the state for a configuration, with an empty ledger
    pub fn new(config: &AppConfig) -> Self {
        Self {
            account_service: Arc::new(AccountService::with_config(&config.account_service)),
            identifier_header: config.identifier_header.clone(),
        }
    }
}

/// API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Account routes
        api::account::create_account,
        api::account::get_account,
        api::account::update_account,
        api::account::delete_account,
        // Statement routes
        api::statement::get_statement,
        api::statement::get_statement_by_date,
        api::statement::get_balance,
        api::statement::deposit,
        api::statement::withdraw,
        // Course mock routes
        api::courses::list_courses,
        api::courses::create_course,
        api::courses::replace_course,
        api::courses::patch_course,
        api::courses::delete_course,
    ),
    components(
        schemas(
            api::account::CreateAccountRequest,
            api::account::UpdateAccountRequest,
            api::statement::DepositRequest,
            api::statement::WithdrawRequest,
            api::statement::BalanceResponse,
            common::model::account::CustomerAccount,
            common::model::statement::Operation,
            common::model::statement::OperationKind,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "account", description = "Account management endpoints"),
        (name = "statement", description = "Deposits, withdrawals, statement and balance"),
        (name = "courses", description = "Static course listings")
    ),
    info(
        title = "Ledger API",
        version = "1.0.0",
        description = "In-memory bank account ledger"
    )
)]
pub struct ApiDoc;

/// Routes of the service, without transport layers
pub fn router(state: Arc<AppState>) -> Router {
    let account_routes = Router::new()
        .route(
            "/account",
            post(create_account)
                .get(get_account)
                .put(update_account)
                .delete(delete_account),
        )
        .route("/statement", get(get_statement))
        .route("/statement/date", get(get_statement_by_date))
        .route("/balance", get(get_balance))
        .route("/deposit", post(deposit))
        .route("/withdraw", post(withdraw));

    let course_routes = Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/:id",
            put(replace_course).patch(patch_course).delete(delete_course),
        );

    let swagger_ui = SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(account_routes)
        .merge(course_routes)
        .merge(swagger_ui)
        .with_state(state)
}
