use std::{collections::HashMap, sync::Arc};

use askama::Template;
use axum::{
    Form, Router,
    extract::{Query, State},
    response::Redirect,
    routing::get,
};
use serde::Deserialize;

use super::render::{APP_TITLE, HtmlError, HtmlResult, error_page, now, parse_form, render};
use crate::{
    db::entities::{bom_component, product},
    error::AppError,
    requests::{NewBomComponent, NewProduct},
    services::ServiceContext,
    state::AppState,
};

pub const PRODUCT_PATH: &str = "/registro_producto";
pub const BOM_PATH: &str = "/registro_bom";
pub const DUPLICATE_SKU_NOTICE: &str = "sku_duplicado";

#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub aviso: Option<String>,
}

impl NoticeQuery {
    fn message(&self) -> String {
        match self.aviso.as_deref() {
            Some(DUPLICATE_SKU_NOTICE) => "Código ya existente".to_string(),
            _ => String::new(),
        }
    }
}

#[derive(Template)]
#[template(path = "registro_producto.html")]
struct ProductTemplate {
    now: String,
    project_name: &'static str,
    notice: String,
    products: Vec<product::Model>,
}

#[derive(Template)]
#[template(path = "registro_bom.html")]
struct BomTemplate {
    now: String,
    project_name: &'static str,
    components: Vec<bom_component::Model>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(PRODUCT_PATH, get(product_page).post(register_product))
        .route(BOM_PATH, get(bom_page).post(register_component))
        .with_state(state)
}

async fn product_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NoticeQuery>,
) -> HtmlResult {
    let products = ServiceContext::from_state(&state)
        .product()
        .list_all()
        .await
        .map_err(error_page)?;
    render(
        &ProductTemplate {
            now: now(),
            project_name: APP_TITLE,
            notice: query.message(),
            products,
        },
        "product registry",
    )
}

async fn register_product(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<HashMap<String, String>>,
) -> Result<Redirect, HtmlError> {
    let new: NewProduct = parse_form(raw)?;
    match ServiceContext::from_state(&state).product().create(new).await {
        Ok(_) => Ok(Redirect::to(PRODUCT_PATH)),
        Err(AppError::Conflict(_)) => Ok(Redirect::to(&format!(
            "{PRODUCT_PATH}?aviso={DUPLICATE_SKU_NOTICE}"
        ))),
        Err(err) => Err(error_page(err)),
    }
}

async fn bom_page(State(state): State<Arc<AppState>>) -> HtmlResult {
    let components = ServiceContext::from_state(&state)
        .bom()
        .list_all()
        .await
        .map_err(error_page)?;
    render(
        &BomTemplate {
            now: now(),
            project_name: APP_TITLE,
            components,
        },
        "bom registry",
    )
}

async fn register_component(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<HashMap<String, String>>,
) -> Result<Redirect, HtmlError> {
    let new: NewBomComponent = parse_form(raw)?;
    ServiceContext::from_state(&state)
        .bom()
        .create(new)
        .await
        .map_err(error_page)?;
    Ok(Redirect::to(BOM_PATH))
}

#[cfg(test)]
mod tests {
    use super::NoticeQuery;

    #[test]
    fn only_known_notices_produce_a_message() {
        let duplicate = NoticeQuery {
            aviso: Some("sku_duplicado".to_string()),
        };
        assert_eq!(duplicate.message(), "Código ya existente");

        let unknown = NoticeQuery {
            aviso: Some("<script>".to_string()),
        };
        assert_eq!(unknown.message(), "");
        assert_eq!(NoticeQuery::default().message(), "");
    }
}
