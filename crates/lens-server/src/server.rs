use std::sync::Arc;

use tokio::net::TcpListener;

use lens_store::{InMemoryLedgerStore, LedgerDump};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// LedgerLens query server.
pub struct LensServer {
    config: ServerConfig,
    state: AppState,
}

impl LensServer {
    /// Build a server backed by the store the config describes: an in-memory
    /// store, seeded from `dump_path` when one is set.
    pub fn from_config(config: ServerConfig) -> ServerResult<Self> {
        let store = match &config.dump_path {
            Some(path) => {
                let dump = LedgerDump::from_file(path)
                    .map_err(|e| ServerError::Config(e.to_string()))?;
                dump.into_store()
            }
            None => InMemoryLedgerStore::new(),
        };
        Ok(Self::with_state(config, AppState::new(Arc::new(store))))
    }

    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = build_router(self.state);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("lens server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = LensServer::from_config(ServerConfig::default()).unwrap();
        assert_eq!(server.config().bind_addr, "127.0.0.1:7233".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = LensServer::from_config(ServerConfig::default()).unwrap();
        let _router = server.router();
    }

    #[test]
    fn missing_dump_is_a_config_error() {
        let config = ServerConfig {
            dump_path: Some("/nonexistent/dump.json".into()),
            ..ServerConfig::default()
        };
        assert!(matches!(
            LensServer::from_config(config),
            Err(ServerError::Config(_))
        ));
    }
}
