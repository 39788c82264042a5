mod handlers;
mod page;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::data::DashboardState;

pub fn create_router(state: DashboardState) -> Router {
    let api = Router::new()
        .route("/charts/pie", get(handlers::pie_chart))
        .route("/charts/scatter", get(handlers::scatter_chart))
        .route("/meta", get(handlers::meta))
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
