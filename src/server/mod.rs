mod handlers;
mod state;

use axum::routing::get;
use axum::Router;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::zones::Catalogue;

pub fn build_router(catalogue: Catalogue) -> Router {
    let state = Arc::new(AppState { catalogue });

    Router::new()
        .route("/api/regions", get(handlers::regions))
        .route("/api/zones", get(handlers::zones))
        .route("/api/resolve", get(handlers::resolve))
        .route("/api/lookup", get(handlers::lookup))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(host: &str, port: u16, catalogue: Catalogue) -> std::io::Result<()> {
    let app = build_router(catalogue);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("zonefinder server listening on http://{}", addr);
    axum::serve(listener, app).await
}
