use crate::handlers;
use crate::middleware::cors_layer;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .route("/reverse/{ip}", get(handlers::reverse_lookup))
        .route("/{rdtype}/{domain}", get(handlers::lookup_record))
        .with_state(state)
}

/// API routes plus the CORS layer when origins are configured.
pub fn create_app(state: AppState, cors_origins: &[String]) -> Router {
    let router = create_api_routes(state);
    match cors_layer(cors_origins) {
        Some(layer) => router.layer(layer),
        None => router,
    }
}
