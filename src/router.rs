use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::middleware::auth::require_api_key;
use crate::service::{DataService, Dht22Service};

/// Shared per-request state: one service per record type plus the optional
/// API key for the auth middleware.
#[derive(Clone)]
pub struct ApiState {
    pub data: DataService,
    pub dht22: Dht22Service,
    pub api_key: Option<Arc<str>>,
}

impl ApiState {
    pub fn new(data: DataService, dht22: Dht22Service, api_key: Option<String>) -> Self {
        Self {
            data,
            dht22,
            api_key: api_key.map(Arc::from),
        }
    }
}

/// Route table plus the middleware stack. CORS sits outside the key check so
/// preflight requests are answered without credentials.
pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .route(
            "/data",
            post(handlers::data::create)
                .get(handlers::data::list)
                .put(handlers::data::update),
        )
        .route(
            "/data/{id}",
            get(handlers::data::read_one).delete(handlers::data::delete),
        )
        .route(
            "/dht22",
            post(handlers::dht22::create)
                .get(handlers::dht22::list)
                .put(handlers::dht22::update),
        )
        .route(
            "/dht22/{id}",
            get(handlers::dht22::read_one).delete(handlers::dht22::delete),
        )
        .layer(from_fn_with_state(state.clone(), require_api_key))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
