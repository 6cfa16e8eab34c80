//! # applifique_server
//!
//! HTTP backend for the Applifique landing page.
//!
//! One process serves two things:
//! - the waitlist API (`POST /api/waitlist`, `GET /api/health`)
//! - the built landing bundle as static files, with an index fallback so the
//!   single-page app owns every other path
//!
//! Signups live in process memory only; restarting the server empties the
//! waitlist.
//!
//! ## Usage
//!
//! ```bash
//! # Defaults: 127.0.0.1:5000, bundle from ./landing/dist
//! applifique_server
//!
//! # Explicit
//! applifique_server --bind 0.0.0.0:8080 --static-dir /srv/applifique
//! ```

mod error;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::state::AppState;
use crate::store::MemStore;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "applifique_server")]
#[command(about = "HTTP backend for the Applifique landing page")]
#[command(version)]
struct Args {
    /// Address to bind, host:port
    #[arg(long, default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Directory holding the built landing bundle
    #[arg(long, default_value = "landing/dist")]
    static_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

// ============================================================================
// App assembly
// ============================================================================

fn create_app(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Unknown paths fall back to index.html so client-side routing works
    let landing = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", routes::router())
        .with_state(state)
        .fallback_service(landing)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Entry point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting applifique_server v{}", env!("CARGO_PKG_VERSION"));
    info!("Serving landing bundle from {:?}", args.static_dir);

    let state = AppState::new(Arc::new(MemStore::new()));
    let app = create_app(state, &args.static_dir);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    info!("Listening on http://{}", args.bind);

    axum::serve(listener, app).await.context("server exited")?;

    Ok(())
}
