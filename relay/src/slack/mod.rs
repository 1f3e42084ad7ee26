//! Slack notification: message rendering and webhook delivery.
//!
//! Given an extracted [`EventEnvelope`](crate::event::EventEnvelope), this
//! module renders a bounded-size mrkdwn summary and performs a single
//! delivery attempt against the configured incoming-webhook URL.

pub mod message;
pub mod notifier;

pub use message::{render_message, SlackMessage};
pub use notifier::{DeliveryOutcome, Notifier};
