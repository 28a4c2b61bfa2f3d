use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    error::AppError,
    response::{ApiResult, JsonApiResponse},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub ok: bool,
    pub version: &'static str,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(state)
}

async fn health(State(state): State<Arc<AppState>>) -> ApiResult<HealthStatus> {
    state
        .db
        .ping()
        .await
        .map_err(|err| AppError::internal_with_source("Store unavailable", err))?;
    JsonApiResponse::ok(HealthStatus {
        ok: true,
        version: env!("CARGO_PKG_VERSION"),
    })
}
