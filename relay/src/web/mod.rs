//! Web server module for the CloudEvent relay.
//!
//! Exposes a single POST endpoint that extracts the event, logs it, and
//! hands it to the Slack notifier, plus static probe and info endpoints.

pub mod handlers;

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use handlers::{
    handle_cloudevent, health, ready, root_info, AppState, CloudEventResponse, ProbeResponse,
};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_info).post(handle_cloudevent))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Map a handler panic to a 500 with a diagnostic body.
///
/// The notifier never propagates failures, so this only fires on a
/// programming defect in request orchestration.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(error = %detail, "cloudevent_handler_panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": format!("Error processing CloudEvent: {}", detail) })),
    )
        .into_response()
}
