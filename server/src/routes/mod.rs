use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{apply_security_headers, create_cors_layer, Config};
use crate::handlers::{
    health_check, quote_price, quote_refund, route_not_found, ticket_availability, validate_price,
};
use crate::state::AppState;

pub fn create_routes(config: &Config) -> Router {
    let state = Arc::new(AppState::new(config.fees));

    let api = Router::new()
        .route("/pricing/quote", post(quote_price))
        .route("/pricing/validate", post(validate_price))
        .route("/tickets/availability", post(ticket_availability))
        .route("/refunds/quote", post(quote_refund));

    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .fallback(route_not_found)
        .with_state(state);

    apply_security_headers(router, config.production)
        .layer(create_cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}
