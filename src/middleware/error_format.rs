use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    error::AppError,
    response::{JsonApiResponse, log_app_error},
    routes::{API_PREFIX, views::render::error_page},
};

const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorFormat {
    Json,
    Html,
}

impl ErrorFormat {
    fn for_request(req: &Request) -> Self {
        if req.uri().path().starts_with(API_PREFIX) {
            return Self::Json;
        }
        if header_contains(req.headers(), header::ACCEPT, "text/html") {
            Self::Html
        } else {
            Self::Json
        }
    }
}

/// Rewrites bare error responses (extractor rejections, unknown paths, static
/// file misses) so API callers always get the JSON envelope and browsers get
/// the HTML error page. Responses that already carry JSON or HTML are kept.
pub async fn error_format_middleware(req: Request, next: Next) -> Response {
    let format = ErrorFormat::for_request(&req);
    let response = next.run(req).await;

    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }
    if header_contains(response.headers(), header::CONTENT_TYPE, "json")
        || header_contains(response.headers(), header::CONTENT_TYPE, "text/html")
    {
        return response;
    }

    let (parts, body) = response.into_parts();
    let app_error = app_error_from_status(status, read_message(status, body).await);
    if status.is_server_error() {
        log_app_error(&app_error, status);
    }

    let mut rebuilt = match format {
        ErrorFormat::Json => JsonApiResponse::from_error(&app_error).into_response(),
        ErrorFormat::Html => error_page(app_error).into_response(),
    };
    // 405 and 415 have no AppError variant; keep what the router decided.
    *rebuilt.status_mut() = status;
    carry_headers(&parts.headers, &mut rebuilt);
    rebuilt
}

fn header_contains(headers: &HeaderMap, name: header::HeaderName, needle: &str) -> bool {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase().contains(needle))
        .unwrap_or(false)
}

async fn read_message(status: StatusCode, body: Body) -> String {
    let text = match to_bytes(body, MAX_ERROR_BODY_BYTES).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).trim().to_string(),
        Err(_) => String::new(),
    };
    if text.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    } else {
        text
    }
}

fn app_error_from_status(status: StatusCode, message: String) -> AppError {
    match status {
        StatusCode::NOT_FOUND => AppError::not_found(message),
        StatusCode::CONFLICT => AppError::conflict(message),
        StatusCode::UNPROCESSABLE_ENTITY => AppError::unprocessable(message),
        _ if status.is_client_error() => AppError::bad_request(message),
        _ => AppError::internal(message),
    }
}

fn carry_headers(src: &HeaderMap, dest: &mut Response) {
    for (name, value) in src {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            dest.headers_mut().insert(name.clone(), value.clone());
        }
    }
}
