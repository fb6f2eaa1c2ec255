// Web server — axum routes for uploading files and viewing scored words.
//
// Pages are server-rendered from the embedded templates. /api/words serves
// the same ranking as JSON. There is no authentication.

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, Path};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::Config;
use crate::db::Database;
use crate::scoring::traits::WordScorer;

pub mod handlers;
pub mod templates;

/// Shared application state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Database>,
    pub config: Arc<Config>,
    pub scorer: Arc<dyn WordScorer>,
}

/// Start the axum web server and block until it exits.
pub async fn run_server(state: AppState) -> Result<()> {
    crate::uploads::ensure_dir(&state.config.upload_dir).await?;

    let addr = format!("{}:{}", state.config.bind, state.config.port);
    let app = build_router(state);

    info!("Listening on http://{addr}/upload_form/");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(|| async { Redirect::to("/upload_form/") }))
        .route(
            "/upload_form/",
            get(handlers::upload::show_form).post(handlers::upload::upload_file),
        )
        .route("/result/", get(handlers::result::result_view))
        .route("/api/words", get(handlers::words::list_words))
        .route("/health", get(health))
        .route("/static/{*path}", get(serve_static))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Serve non-HTML assets (the stylesheet) from the embedded template dir.
async fn serve_static(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');
    match templates::TEMPLATES.get_file(path) {
        Some(file) if !path.ends_with(".html") => {
            let mime = mime_type(path);
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, HeaderValue::from_static(mime))
                .body(Body::from(file.contents()))
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

fn mime_type(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("");
    match ext {
        "css" => "text/css",
        "js" => "application/javascript",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

/// Unrecovered failure inside a page handler (decode, storage, scoring).
///
/// Logged in full, rendered to the client as a bare 500 page.
#[derive(Debug)]
pub struct WebError(anyhow::Error);

impl<E> From<E> for WebError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(error = %format!("{:#}", self.0), "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h1>Internal Server Error</h1>"),
        )
            .into_response()
    }
}
