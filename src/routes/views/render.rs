use std::collections::HashMap;

use askama::Template;
use axum::{http::StatusCode, response::Html};
use chrono::Local;

use crate::{
    error::AppError,
    intake::{FormFields, FromForm},
};

pub(crate) const APP_TITLE: &str = "Planeación de Manufactura";

pub(crate) type HtmlError = (StatusCode, Html<String>);
pub(crate) type HtmlResult = Result<Html<String>, HtmlError>;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    now: String,
    project_name: &'static str,
    status: u16,
    reason: &'static str,
    message: String,
}

pub(crate) fn now() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}

pub(crate) fn render<T: Template>(template: &T, page: &'static str) -> HtmlResult {
    template.render().map(Html).map_err(|err| {
        tracing::error!(page, error = %err, "template render failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("failed to render {page}")),
        )
    })
}

/// Turns a boundary error into an HTML page carrying the mapped status.
pub(crate) fn error_page(err: AppError) -> HtmlError {
    let status = err.status();
    let page = ErrorTemplate {
        now: now(),
        project_name: APP_TITLE,
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Error"),
        message: err.message().to_string(),
    };
    match page.render() {
        Ok(body) => (status, Html(body)),
        Err(_) => (status, Html(err.message().to_string())),
    }
}

pub(crate) fn parse_form<T: FromForm>(raw: HashMap<String, String>) -> Result<T, HtmlError> {
    T::from_form(&FormFields::from(raw)).map_err(|err| {
        tracing::warn!(field = err.field(), error = %err, "rejected form submission");
        error_page(err.into())
    })
}
