//! CloudEvent extraction from inbound HTTP requests.
//!
//! This module turns an arbitrary header set and body into a structured
//! [`EventEnvelope`]. Extraction is total: malformed JSON and undecodable
//! bytes fall back to a raw-body representation instead of failing.

pub mod envelope;
pub mod extractor;

pub use envelope::{EventEnvelope, EventPayload};
pub use extractor::{extract, CE_HEADER_PREFIX};
