use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all LedgerLens endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .route("/v1/account_channels", post(handler::account_channels_handler))
        .route("/v1/noripple_check", post(handler::noripple_check_handler))
        .route("/v1/gateway_balances", post(handler::gateway_balances_handler))
        .route("/v1/random", get(handler::random_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
