use axum::{
    body::Body,
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use leptos::config::LeptosOptions;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

// from https://github.com/leptos-rs/start-axum

/// Serve the compiled wasm bundle, stylesheet and other static files from the site root.
#[debug_handler]
pub async fn file_and_error_handler(
    State(options): State<LeptosOptions>,
    request: Request<Body>,
) -> Response<Body> {
    ServeDir::new(options.site_root.as_ref())
        .oneshot(request)
        .await
        .into_response()
}
