//! HTTP layer for candyshelf.
//!
//! Exposes an axum [`Router`] backed by any
//! [`candyshelf_core::store::CandyStore`]. TLS and reverse-proxy concerns
//! are the caller's responsibility.

pub mod error;
pub mod handlers;
pub mod pages;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use candyshelf_core::store::CandyStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: CandyStore> {
  pub store: Arc<S>,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] serving the list and create flows.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: CandyStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(handlers::list::<S>))
    .route(
      "/create",
      get(handlers::show_form::<S>).post(handlers::submit::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ───────────────────────────────────────────────────────
