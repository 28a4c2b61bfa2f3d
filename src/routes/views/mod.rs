use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub mod capacity;
pub mod catalog;
pub mod public;
pub(crate) mod render;
pub mod schedule;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(catalog::router(state.clone()))
        .merge(schedule::router(state.clone()))
        .merge(capacity::router(state))
        .merge(public::router())
}
