//! Header and body extraction for inbound CloudEvents.

use axum::http::HeaderMap;

use super::envelope::{EventEnvelope, EventPayload};

/// Header name prefix carrying CloudEvent attributes (binary content mode).
pub const CE_HEADER_PREFIX: &str = "ce-";

/// Parse inbound headers and body into an [`EventEnvelope`].
///
/// This function is total: it always succeeds, for any header set and any
/// byte body. Headers whose name starts with `ce-` become event metadata in
/// arrival order (header names are already lowercased by the HTTP layer, so
/// the prefix match is case-insensitive with respect to the wire form).
/// A repeated header name keeps its first-seen position with the last value,
/// standard last-wins header semantics. The body is parsed as JSON when
/// possible; malformed or undecodable bodies fall back to lossily decoded
/// text.
pub fn extract(headers: &HeaderMap, body: &[u8]) -> EventEnvelope {
    let mut metadata: Vec<(String, String)> = Vec::new();
    for (name, value) in headers.iter() {
        if !name.as_str().starts_with(CE_HEADER_PREFIX) {
            continue;
        }
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        match metadata.iter_mut().find(|(key, _)| key == name.as_str()) {
            Some(entry) => entry.1 = value,
            None => metadata.push((name.as_str().to_string(), value)),
        }
    }

    let payload = if body.is_empty() {
        EventPayload::Json(serde_json::json!({}))
    } else {
        match serde_json::from_slice(body) {
            Ok(value) => EventPayload::Json(value),
            Err(_) => EventPayload::RawText(String::from_utf8_lossy(body).into_owned()),
        }
    };

    EventEnvelope { metadata, payload }
}
