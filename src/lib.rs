pub mod config;
pub mod dedup;
pub mod email;
pub mod error;
pub mod parser;
pub mod routes;
pub mod state;
pub mod validate;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::dedup::DedupCache;
use crate::email::Mailer;
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config, mailer: Arc<dyn Mailer>) -> Router {
    let cors = build_cors(&config);
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        dedup: DedupCache::new(Duration::from_secs(config.dedup_cooldown_secs)),
        config,
        mailer,
    });

    Router::new()
        .merge(routes::api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body_size))
                .layer(cors),
        )
        .with_state(state)
}

fn build_cors(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .expose_headers([header::CONTENT_DISPOSITION])
}
