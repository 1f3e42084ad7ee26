//! Parsed representation of one inbound CloudEvent notification.

use serde_json::{json, Value};

/// Event payload parsed from the request body.
///
/// Parsing never fails: bodies that are not well-formed JSON are kept as
/// lossily decoded text and surfaced under a `raw_body` key.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    /// Body was well-formed JSON (an empty body parses as an empty object)
    Json(Value),
    /// Body was malformed JSON or invalid UTF-8; decoded with replacement
    RawText(String),
}

impl EventPayload {
    /// JSON view of the payload as embedded in logs and Slack messages.
    pub fn to_json(&self) -> Value {
        match self {
            EventPayload::Json(value) => value.clone(),
            EventPayload::RawText(text) => json!({ "raw_body": text }),
        }
    }
}

/// The parsed (metadata, payload) pair derived from one inbound request.
///
/// Constructed once per request and read-only afterwards. Metadata keeps the
/// original header names and arrival order; a duplicate name collapses to a
/// single entry holding the last value received.
#[derive(Debug, Clone)]
pub struct EventEnvelope {
    /// `ce-`-prefixed header pairs, name case as received
    pub metadata: Vec<(String, String)>,
    /// Parsed request body
    pub payload: EventPayload,
}

impl EventEnvelope {
    /// Whether any CloudEvent attribute headers were present.
    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }
}
