//! Static asset server for the pre-built UI bundle.
//!
//! Every path that does not name a file under the static directory gets the
//! index page so the single-page app can route client-side.

use axum::{response::IntoResponse, routing::get, Json, Router};
use http::HeaderValue;
use serde_json::json;
use tokio::{net::TcpListener, signal};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::AppConfig;

/// Basic liveness probe
async fn liveness_check() -> impl IntoResponse {
    Json(json!({
        "status": "up",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Explicit origins when configured, any origin otherwise.
pub fn cors_layer(cfg: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .cors_origins()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        info!("Using permissive CORS because explicit origins were not configured");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Builds the asset router: `/health` plus the static bundle with SPA fallback.
pub fn router(cfg: &AppConfig) -> Router {
    let assets = ServeDir::new(cfg.static_dir()).fallback(ServeFile::new(cfg.index_path()));

    Router::new()
        .route("/health", get(liveness_check))
        .fallback_service(assets)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CompressionLayer::new())
        .layer(cors_layer(cfg))
}

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
pub async fn serve(cfg: &AppConfig) -> std::io::Result<()> {
    if !cfg.index_path().is_file() {
        warn!(
            "Index file {} not found; unknown routes will return 404",
            cfg.index_path().display()
        );
    }

    let app = router(cfg);
    let listener = TcpListener::bind(cfg.bind_address()).await?;
    info!(
        "Serving {} on {}",
        cfg.static_dir().display(),
        cfg.server_url()
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
