use std::{collections::HashMap, sync::Arc};

use askama::Template;
use axum::{Form, Router, extract::State, response::Redirect, routing::get};

use super::render::{APP_TITLE, HtmlError, HtmlResult, error_page, now, parse_form, render};
use crate::{
    db::entities::product,
    requests::{NewMpsEntry, NewMrpEntry},
    services::ServiceContext,
    state::AppState,
};

pub const MPS_PATH: &str = "/mps";
pub const MRP_PATH: &str = "/mrp";

struct MpsRow {
    id: i32,
    product: String,
    forecast_demand: i32,
    safety_stock: f64,
    date: String,
}

struct MrpRow {
    id: i32,
    product: String,
    periods: i32,
    scrap_percentage: f64,
}

#[derive(Template)]
#[template(path = "mps.html")]
struct MpsTemplate {
    now: String,
    project_name: &'static str,
    products: Vec<product::Model>,
    entries: Vec<MpsRow>,
}

#[derive(Template)]
#[template(path = "mrp.html")]
struct MrpTemplate {
    now: String,
    project_name: &'static str,
    products: Vec<product::Model>,
    entries: Vec<MrpRow>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(MPS_PATH, get(mps_page).post(schedule_demand))
        .route(MRP_PATH, get(mrp_page).post(plan_requirements))
        .with_state(state)
}

// Entries reference products by id; the tables show the sku instead.
fn product_label(products: &[product::Model], product_id: i32) -> String {
    products
        .iter()
        .find(|product| product.id == product_id)
        .map(|product| format!("{} - {}", product.sku, product.name))
        .unwrap_or_else(|| format!("#{product_id}"))
}

async fn mps_page(State(state): State<Arc<AppState>>) -> HtmlResult {
    let services = ServiceContext::from_state(&state);
    let products = services.product().list_all().await.map_err(error_page)?;
    let entries = services
        .mps()
        .list_all()
        .await
        .map_err(error_page)?
        .into_iter()
        .map(|entry| MpsRow {
            id: entry.id,
            product: product_label(&products, entry.product_id),
            forecast_demand: entry.forecast_demand,
            safety_stock: entry.safety_stock,
            date: entry
                .date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        })
        .collect();

    render(
        &MpsTemplate {
            now: now(),
            project_name: APP_TITLE,
            products,
            entries,
        },
        "master production schedule",
    )
}

async fn schedule_demand(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<HashMap<String, String>>,
) -> Result<Redirect, HtmlError> {
    let new: NewMpsEntry = parse_form(raw)?;
    ServiceContext::from_state(&state)
        .mps()
        .create(new)
        .await
        .map_err(error_page)?;
    Ok(Redirect::to(MPS_PATH))
}

async fn mrp_page(State(state): State<Arc<AppState>>) -> HtmlResult {
    let services = ServiceContext::from_state(&state);
    let products = services.product().list_all().await.map_err(error_page)?;
    let entries = services
        .mrp()
        .list_all()
        .await
        .map_err(error_page)?
        .into_iter()
        .map(|entry| MrpRow {
            id: entry.id,
            product: product_label(&products, entry.product_id),
            periods: entry.periods,
            scrap_percentage: entry.scrap_percentage,
        })
        .collect();

    render(
        &MrpTemplate {
            now: now(),
            project_name: APP_TITLE,
            products,
            entries,
        },
        "material requirements",
    )
}

async fn plan_requirements(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<HashMap<String, String>>,
) -> Result<Redirect, HtmlError> {
    let new: NewMrpEntry = parse_form(raw)?;
    ServiceContext::from_state(&state)
        .mrp()
        .create(new)
        .await
        .map_err(error_page)?;
    Ok(Redirect::to(MRP_PATH))
}
