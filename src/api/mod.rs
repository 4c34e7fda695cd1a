pub mod error;
pub mod health;
pub mod v1;

use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::Config, state::AppState};

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new()
        .route("/", get(v1::index))
        .route("/healthz", get(health::liveness_check))
        .with_state(state.clone())
        .nest("/api/v1.0", v1::router(state));

    if cfg.server.enable_cors {
        use tower_http::cors::Any;
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([axum::http::Method::GET]);
        router = router.layer(cors);
    }

    router
        .layer(ServiceBuilder::new().layer(TimeoutLayer::new(Duration::from_secs(
            cfg.server.request_timeout_secs,
        ))))
        .layer(TraceLayer::new_for_http())
}
