use std::path::PathBuf;

use askama::Template;
use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use super::render::{APP_TITLE, HtmlResult, now, render};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    now: String,
    project_name: &'static str,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route_service("/{*file}", ServeDir::new(resolve_public_dir()))
}

fn resolve_public_dir() -> PathBuf {
    if let Ok(current_dir) = std::env::current_dir() {
        let candidate = current_dir.join("public");
        if candidate.exists() {
            return candidate;
        }
    }

    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let candidate = exe_dir.join("public");
        if candidate.exists() {
            return candidate;
        }
    }

    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}

async fn index() -> HtmlResult {
    render(
        &IndexTemplate {
            now: now(),
            project_name: APP_TITLE,
        },
        "index",
    )
}
