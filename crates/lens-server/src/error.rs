use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use lens_query::QueryError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// HTTP status and wire error code for this failure.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::Query(QueryError::InvalidParams(_)) => {
                (StatusCode::BAD_REQUEST, "invalidParams")
            }
            ServerError::Query(QueryError::AccountNotFound(_)) => {
                (StatusCode::NOT_FOUND, "actNotFound")
            }
            ServerError::Query(QueryError::LedgerNotFound) => {
                (StatusCode::NOT_FOUND, "lgrNotFound")
            }
            ServerError::Query(QueryError::Store(_)) => {
                (StatusCode::BAD_GATEWAY, "upstreamUnavailable")
            }
            ServerError::Config(_) | ServerError::Io(_) | ServerError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(json!({
            "error": code,
            "error_message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_errors_map_to_client_statuses() {
        let invalid = ServerError::from(QueryError::invalid("bad limit"));
        assert_eq!(invalid.status_and_code().0, StatusCode::BAD_REQUEST);

        let missing = ServerError::from(QueryError::AccountNotFound("r...".into()));
        assert_eq!(missing.status_and_code(), (StatusCode::NOT_FOUND, "actNotFound"));

        let no_ledger = ServerError::from(QueryError::LedgerNotFound);
        assert_eq!(no_ledger.status_and_code(), (StatusCode::NOT_FOUND, "lgrNotFound"));
    }

    #[test]
    fn store_failures_are_bad_gateway() {
        let err = ServerError::from(QueryError::Store(
            lens_store::StoreError::Unavailable("backend down".into()),
        ));
        assert_eq!(
            err.status_and_code(),
            (StatusCode::BAD_GATEWAY, "upstreamUnavailable")
        );
    }
}
