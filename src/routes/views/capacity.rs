use std::{collections::HashMap, sync::Arc};

use askama::Template;
use axum::{Form, Router, extract::State, response::Redirect, routing::get};

use super::render::{APP_TITLE, HtmlError, HtmlResult, error_page, now, parse_form, render};
use crate::{
    db::entities::work_center, requests::NewWorkCenter, services::ServiceContext,
    state::AppState,
};

pub const WORK_CENTER_PATH: &str = "/centro_trabajo";
pub const CRP_PATH: &str = "/crp";

struct WorkCenterRow {
    id: i32,
    line_name: String,
    initial_capacity: i32,
    operator_count: i32,
    throughput: f64,
    overtime_cost: f64,
    overtime_budget: f64,
    hiring_cost: f64,
    layoff_cost: f64,
    salary: String,
}

impl From<work_center::Model> for WorkCenterRow {
    fn from(center: work_center::Model) -> Self {
        Self {
            id: center.id,
            line_name: center.line_name,
            initial_capacity: center.initial_capacity,
            operator_count: center.operator_count,
            throughput: center.throughput,
            overtime_cost: center.overtime_cost,
            overtime_budget: center.overtime_budget,
            hiring_cost: center.hiring_cost,
            layoff_cost: center.layoff_cost,
            salary: center
                .salary
                .map(|salary| salary.to_string())
                .unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "centro_trabajo.html")]
struct WorkCenterTemplate {
    now: String,
    project_name: &'static str,
    centers: Vec<WorkCenterRow>,
}

#[derive(Template)]
#[template(path = "crp.html")]
struct CrpTemplate {
    now: String,
    project_name: &'static str,
    centers: Vec<WorkCenterRow>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            WORK_CENTER_PATH,
            get(work_center_page).post(register_work_center),
        )
        .route(CRP_PATH, get(crp_page))
        .with_state(state)
}

async fn load_rows(state: &AppState) -> Result<Vec<WorkCenterRow>, HtmlError> {
    let centers = ServiceContext::from_state(state)
        .work_center()
        .list_all()
        .await
        .map_err(error_page)?;
    Ok(centers.into_iter().map(WorkCenterRow::from).collect())
}

async fn work_center_page(State(state): State<Arc<AppState>>) -> HtmlResult {
    let centers = load_rows(&state).await?;
    render(
        &WorkCenterTemplate {
            now: now(),
            project_name: APP_TITLE,
            centers,
        },
        "work center registry",
    )
}

async fn register_work_center(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<HashMap<String, String>>,
) -> Result<Redirect, HtmlError> {
    let new: NewWorkCenter = parse_form(raw)?;
    ServiceContext::from_state(&state)
        .work_center()
        .create(new)
        .await
        .map_err(error_page)?;
    Ok(Redirect::to(WORK_CENTER_PATH))
}

async fn crp_page(State(state): State<Arc<AppState>>) -> HtmlResult {
    let centers = load_rows(&state).await?;
    render(
        &CrpTemplate {
            now: now(),
            project_name: APP_TITLE,
            centers,
        },
        "capacity requirements",
    )
}
