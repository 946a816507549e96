//! HTTP transport: a thin axum adapter over the conversion pipeline.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

use crate::error::BotResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct ConvertParams {
    url: String,
    #[serde(default)]
    analyze: bool,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/convert", get(convert))
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "status": "active",
        "message": "Teralink converter API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn convert(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConvertParams>,
) -> impl IntoResponse {
    let envelope = state.convert(&params.url, params.analyze).await;

    // The transport maps only the success flag, never the error kind.
    let status = if envelope.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(envelope))
}

pub async fn serve(state: Arc<AppState>) -> BotResult<()> {
    let port = state.config.server.port;
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;

    info!("HTTP API listening on port {}", port);

    axum::serve(listener, router(state)).await?;

    Ok(())
}
