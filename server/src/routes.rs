//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only serves the Leptos app: SSR pages, the compiled `/pkg`
//! bundle, and a health probe. Task and auth data come from the two backend
//! services, which the browser calls directly.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{HostConfig, HostError};

/// Routes shared by every deployment, wrapped in CORS and request tracing.
pub fn base_routes(router: Router) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    router
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Leptos SSR frontend plus static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(config: &HostConfig) -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = config
        .site_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));
    tracing::debug!(site_root = %site_root.display(), "serving static assets");

    let router = leptos_router
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new());
    Ok(base_routes(router))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
