use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        chat::chat,
        fleet::{get_fleet, get_stats, get_table, list_recommendations, regenerate_fleet},
        health::livez,
        profiles::list_profiles,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/profiles", get(list_profiles))
        .route("/fleet", get(get_fleet).post(regenerate_fleet))
        .route("/fleet/tables/{id}", get(get_table))
        .route("/fleet/stats", get(get_stats))
        .route("/fleet/recommendations", get(list_recommendations))
        .route("/chat", post(chat))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
