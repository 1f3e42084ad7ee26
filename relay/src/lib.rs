//! CloudEvent relay - single-endpoint event notification service.
//!
//! Accepts CloudEvents delivered over HTTP (binary content mode), logs them,
//! and optionally forwards a human-readable summary to a Slack webhook.
//!
//! ## Architecture
//!
//! ```text
//! POST / → Event Extractor → EventEnvelope → Slack Notifier → sent/skipped/failed
//! ```
//!
//! No state is shared across requests beyond the immutable [`Config`].

pub mod config;
pub mod event;
pub mod slack;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use event::{extract, EventEnvelope, EventPayload};
pub use slack::{DeliveryOutcome, Notifier, SlackMessage};
pub use web::AppState;
