use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::routes::{health, weather};

pub fn create_app() -> Router {
    Router::new()
        .route("/health", get(health::get_health))
        .route("/weather", get(weather::get_weather))
        .layer(TraceLayer::new_for_http())
}
