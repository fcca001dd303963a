//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the health probe, the hydrate bundle under `/pkg`
//! and the Leptos SSR shell at `/`. The site has a single URL, so any other
//! path redirects home.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("bind {addr} failed: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Full application router.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback(redirect_home)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve `app` until the process exits.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server loop fails.
pub async fn serve(addr: std::net::SocketAddr, app: Router) -> Result<(), ServeError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    tracing::info!(%addr, "rks-site listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn redirect_home() -> Redirect {
    Redirect::temporary("/")
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
