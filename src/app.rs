use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{analytics, health, portfolios, trades};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // The frontend is served from a different origin in development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/portfolios", portfolios::router())
        .nest("/api/trades", trades::router())
        .nest("/api/analytics", analytics::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
