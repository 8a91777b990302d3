//! HTTP endpoints for the profile data service.
//!
//! This module is organized into submodules:
//! - `profiles` - user profile CRUD (/api/profiles/*)
//! - `transactions` - transaction ledger (/api/transactions/*)
//! - `notifications` - in-app notifications (/api/notifications/*)
//! - `health` - health check endpoint (/healthz)
//! - `openapi` - OpenAPI/Utoipa configuration

pub mod health;
pub mod notifications;
pub mod openapi;
pub mod profiles;
pub mod transactions;

pub use health::MISC_TAG;
pub use notifications::NOTIFICATIONS_TAG;
pub use profiles::PROFILES_TAG;
pub use transactions::TRANSACTIONS_TAG;

use crate::AppResources;
use crate::config::PaginationConfig;
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{IntoParams, OpenApi};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_redoc::{Redoc, Servable};

/// Pagination query parameters shared by the listing endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Zero-based page index.
    pub page: Option<u64>,
    /// Requested page size, clamped to the configured maximum.
    pub size: Option<u64>,
}

impl PaginationQuery {
    pub fn resolve(&self, config: &PaginationConfig) -> (u64, u64) {
        let page = self.page.unwrap_or(0);
        let size = self
            .size
            .unwrap_or(config.default_page_size)
            .clamp(1, config.max_page_size);
        (page, size)
    }
}

/// Build the full application router with the OpenAPI docs mounted at `/api-docs`.
pub fn build_router(resources: AppResources) -> axum::Router {
    let (router, api) = OpenApiRouter::with_openapi(openapi::ApiDoc::openapi())
        .nest("/api/profiles", profiles::router())
        .nest("/api/transactions", transactions::router())
        .nest("/api/notifications", notifications::router())
        .routes(routes!(health::health))
        .layer(axum::Extension(resources))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .split_for_parts();

    router.merge(Redoc::with_url("/api-docs", api))
}

/// Starts the web server with all configured routes.
#[tracing::instrument(skip(resources))]
pub async fn start_webserver(resources: AppResources) -> color_eyre::Result<()> {
    let listen_addr = resources.config.listen_addr.clone();
    let router = build_router(resources);

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    tracing::info!(addr = %listen_addr, "server running");
    axum::serve(listener, router)
        .await
        .map_err(|e| color_eyre::Report::msg(format!("Failed to start server: {e}")))?;

    Ok(())
}
