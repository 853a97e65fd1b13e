//! HTTP server for LedgerLens.
//!
//! A thin axum front end over [`lens_query`]: each endpoint validates its
//! JSON body into typed parameters, runs the query against the configured
//! [`lens_store::LedgerStore`], and renders the response or a structured
//! error body.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::LensServer;
pub use state::AppState;
