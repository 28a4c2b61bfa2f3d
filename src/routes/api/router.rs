use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{public, records};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router(state.clone()))
        .merge(records::router(state))
}
