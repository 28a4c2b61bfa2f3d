//! JSON access to the same records the HTML forms manage.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};

use crate::{
    db::entities::{bom_component, mps_entry, mrp_entry, product, work_center},
    requests::{NewBomComponent, NewMpsEntry, NewMrpEntry, NewProduct, NewWorkCenter},
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/bom-components",
            get(list_components).post(create_component),
        )
        .route(
            "/work-centers",
            get(list_work_centers).post(create_work_center),
        )
        .route("/mps-entries", get(list_mps_entries).post(create_mps_entry))
        .route("/mrp-entries", get(list_mrp_entries).post(create_mrp_entry))
        .with_state(state)
}

async fn list_products(State(state): State<Arc<AppState>>) -> ApiResult<Vec<product::Model>> {
    let products = ServiceContext::from_state(&state).product().list_all().await?;
    JsonApiResponse::ok(products)
}

async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewProduct>,
) -> ApiResult<product::Model> {
    let created = ServiceContext::from_state(&state)
        .product()
        .create(body)
        .await?;
    JsonApiResponse::created(created)
}

async fn list_components(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<bom_component::Model>> {
    let components = ServiceContext::from_state(&state).bom().list_all().await?;
    JsonApiResponse::ok(components)
}

async fn create_component(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewBomComponent>,
) -> ApiResult<bom_component::Model> {
    let created = ServiceContext::from_state(&state).bom().create(body).await?;
    JsonApiResponse::created(created)
}

async fn list_work_centers(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<work_center::Model>> {
    let centers = ServiceContext::from_state(&state)
        .work_center()
        .list_all()
        .await?;
    JsonApiResponse::ok(centers)
}

async fn create_work_center(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewWorkCenter>,
) -> ApiResult<work_center::Model> {
    let created = ServiceContext::from_state(&state)
        .work_center()
        .create(body)
        .await?;
    JsonApiResponse::created(created)
}

async fn list_mps_entries(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<mps_entry::Model>> {
    let entries = ServiceContext::from_state(&state).mps().list_all().await?;
    JsonApiResponse::ok(entries)
}

async fn create_mps_entry(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewMpsEntry>,
) -> ApiResult<mps_entry::Model> {
    let created = ServiceContext::from_state(&state).mps().create(body).await?;
    JsonApiResponse::created(created)
}

async fn list_mrp_entries(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<mrp_entry::Model>> {
    let entries = ServiceContext::from_state(&state).mrp().list_all().await?;
    JsonApiResponse::ok(entries)
}

async fn create_mrp_entry(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewMrpEntry>,
) -> ApiResult<mrp_entry::Model> {
    let created = ServiceContext::from_state(&state).mrp().create(body).await?;
    JsonApiResponse::created(created)
}
