//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    extract::State,
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main router
///
/// Registry routes are nested under the configured base path; health and
/// metrics endpoints stay at the root.
pub fn create_router(state: AppState) -> Router {
    let base_path = state.settings.server.normalized_base_path().to_owned();

    let router = if base_path == "/" {
        Router::new().merge(api_routes())
    } else {
        Router::new().nest(&base_path, api_routes())
    };

    router
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let idle = u32::try_from(state.db.num_idle()).unwrap_or(u32::MAX);
    let size = state.db.size();
    metrics::update_db_pool_stats(
        idle,
        size.saturating_sub(idle),
        state.settings.database.max_connections,
    );

    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Registry routes, relative to the base path
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dogs", dog_routes())
        .route("/statuses", get(handlers::reference::list_statuses))
        .route(
            "/leaving-reasons",
            get(handlers::reference::list_leaving_reasons),
        )
}

/// Dog routes
fn dog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::dog::list_dogs).post(handlers::dog::create_dog),
        )
        .route(
            "/{dog_id}",
            get(handlers::dog::get_dog)
                .put(handlers::dog::update_dog)
                .delete(handlers::dog::delete_dog),
        )
}
