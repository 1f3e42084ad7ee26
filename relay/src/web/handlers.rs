//! CloudEvent endpoint handlers.
//!
//! The POST handler is deliberately thin: extract the envelope, log it,
//! attempt Slack delivery, and report the three-way outcome. Delivery
//! failures are part of the response body, never an inbound error status.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::event::{extract, EventEnvelope};
use crate::slack::Notifier;
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let notifier = Notifier::new(Arc::new(config));
        Self { notifier }
    }
}

// =============================================================================
// Probes
// =============================================================================

/// Static probe response.
#[derive(Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Health check endpoint for the liveness probe.
pub async fn health() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "healthy",
        message: "Function is running",
    })
}

/// Readiness check endpoint.
pub async fn ready() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "ready",
        message: "Function is ready to receive requests",
    })
}

/// Root endpoint with basic service information.
pub async fn root_info() -> Json<Value> {
    Json(json!({
        "message": "Knative CloudEvent Function",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "readiness": "/ready",
            "cloudevents": "POST /"
        }
    }))
}

// =============================================================================
// CloudEvent Endpoint
// =============================================================================

/// Response for a processed CloudEvent.
#[derive(Serialize)]
pub struct CloudEventResponse {
    pub message: &'static str,
    pub slack_notification: &'static str,
}

/// Handle an incoming CloudEvent of any type.
///
/// Logs the event details and forwards a summary to Slack when configured.
pub async fn handle_cloudevent(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<CloudEventResponse> {
    let envelope = extract(&headers, &body);

    log_envelope(&envelope, &headers);

    let outcome = state.notifier.notify(&envelope).await;

    Json(CloudEventResponse {
        message: "CloudEvent received and processed successfully",
        slack_notification: outcome.as_str(),
    })
}

/// Log the complete CloudEvent information.
fn log_envelope(envelope: &EventEnvelope, headers: &HeaderMap) {
    for (key, value) in &envelope.metadata {
        info!(header = %key, value = %value, "cloudevent_attribute");
    }

    info!(
        ce_header_count = envelope.metadata.len(),
        request_header_count = headers.len(),
        body = %envelope.payload.to_json(),
        "cloudevent_received"
    );
}
