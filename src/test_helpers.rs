use std::sync::Arc;

use axum::{Router, middleware};
use sea_orm::DatabaseConnection;

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::connection,
    middleware::{catch_panic_layer, error_format_middleware},
    requests::{NewProduct, NewWorkCenter},
    routes::router,
    state::AppState,
};

/// In-memory SQLite store with the schema applied. A single pooled
/// connection keeps every query on the same in-memory database.
pub async fn test_db() -> DatabaseConnection {
    let cfg = DatabaseConfig {
        max_connections: 1,
        min_idle: 1,
        ..DatabaseConfig::with_url("sqlite::memory:")
    };
    connection::open(&cfg).await.expect("open in-memory store")
}

pub async fn test_state() -> Arc<AppState> {
    let cfg = AppConfig {
        database: DatabaseConfig::with_url("sqlite::memory:"),
        ..AppConfig::default()
    };
    AppState::new(cfg, test_db().await)
}

/// The application router with the same global layers `main` installs.
pub fn test_router(state: Arc<AppState>) -> Router {
    router(state)
        .layer(middleware::from_fn(error_format_middleware))
        .layer(catch_panic_layer())
}

pub fn sample_product(sku: &str, name: &str) -> NewProduct {
    NewProduct {
        sku: sku.to_string(),
        name: name.to_string(),
        quantity_on_hand: 10,
        price: 9.99,
        active: true,
        lead_time_days: 5,
    }
}

pub fn sample_work_center(line: &str) -> NewWorkCenter {
    NewWorkCenter {
        line_name: line.to_string(),
        initial_capacity: 100,
        operator_count: 4,
        throughput: 12.5,
        overtime_cost: 30.0,
        overtime_budget: 1500.0,
        hiring_cost: 800.0,
        layoff_cost: 1200.0,
        salary: None,
    }
}
