//! crudapp API Routes
//!
//! - /items - Item collection (list, create)
//! - /items/:id - Single item (update, delete)
//! - /health - Liveness check
//! - /swagger-ui - OpenAPI documentation

pub mod health;
pub mod item;
pub mod swagger;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;

/// Build the full application router with shared state
pub fn build_router(state: AppState) -> Router {
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health::health_check))
        .merge(item::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
