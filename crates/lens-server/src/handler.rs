use axum::Json;
use axum::extract::State;
use serde::de::DeserializeOwned;
use serde_json::json;

use lens_query::{
    ChannelsParams, ChannelsResponse, GatewayBalancesParams, GatewayBalancesResponse,
    NoRippleParams, NoRippleResponse, QueryError, RandomResponse,
};

use crate::error::ServerResult;
use crate::state::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "lens-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// Bodies arrive as raw JSON so that shape mismatches surface as
// invalidParams rather than the extractor's generic rejection.
fn parse_params<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, QueryError> {
    serde_json::from_value(body).map_err(|e| QueryError::invalid(e.to_string()))
}

/// `POST /v1/account_channels`
pub async fn account_channels_handler(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> ServerResult<Json<ChannelsResponse>> {
    let params: ChannelsParams = parse_params(body)?;
    let response = lens_query::account_channels(state.store(), &params).await?;
    Ok(Json(response))
}

/// `POST /v1/noripple_check`
pub async fn noripple_check_handler(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> ServerResult<Json<NoRippleResponse>> {
    let params: NoRippleParams = parse_params(body)?;
    let response = lens_query::noripple_check(state.store(), &params).await?;
    Ok(Json(response))
}

/// `POST /v1/gateway_balances`
pub async fn gateway_balances_handler(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> ServerResult<Json<GatewayBalancesResponse>> {
    let params: GatewayBalancesParams = parse_params(body)?;
    let response = lens_query::gateway_balances(state.store(), &params).await?;
    Ok(Json(response))
}

/// `GET /v1/random`
pub async fn random_handler() -> Json<RandomResponse> {
    Json(lens_query::random_digest())
}
