//! Slack webhook delivery.
//!
//! One delivery attempt per envelope, bounded by the configured timeout.
//! Transport and status failures are logged and reported as an outcome
//! value, never propagated to the request handler.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{error, info};

use crate::config::Config;
use crate::event::EventEnvelope;

use super::message::{render_message, SlackMessage};

/// Three-state result of attempting outbound notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The webhook accepted the message with a 2xx status
    Sent,
    /// No webhook URL is configured; no network call was made
    Skipped,
    /// The POST failed: network error, timeout, or non-2xx status
    Failed,
}

impl DeliveryOutcome {
    /// Wire form used in the inbound response body.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOutcome::Sent => "sent",
            DeliveryOutcome::Skipped => "skipped",
            DeliveryOutcome::Failed => "failed",
        }
    }
}

/// Internal classification of a failed delivery attempt, for logging only.
#[derive(Debug, Error)]
enum DeliveryError {
    #[error("slack webhook returned status {0}")]
    Status(StatusCode),
    #[error("slack webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Slack notifier holding the shared HTTP client and configuration.
#[derive(Clone)]
pub struct Notifier {
    client: Client,
    config: Arc<Config>,
}

impl Notifier {
    /// Create a notifier with a client bound to the configured timeout.
    pub fn new(config: Arc<Config>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.slack_timeout_ms))
            .build()
            .expect("Failed to create Slack HTTP client");

        Self { client, config }
    }

    /// Render the envelope and attempt one webhook delivery.
    pub async fn notify(&self, envelope: &EventEnvelope) -> DeliveryOutcome {
        let Some(webhook_url) = self.config.slack_webhook_url.as_deref() else {
            info!("slack_webhook_not_configured_skipping");
            return DeliveryOutcome::Skipped;
        };

        let message = SlackMessage {
            text: render_message(envelope, self.config.slack_data_limit),
            channel: self.config.slack_channel.clone(),
            username: self.config.slack_username.clone(),
            icon_emoji: self.config.slack_icon_emoji.clone(),
        };

        match self.post(webhook_url, &message).await {
            Ok(status) => {
                info!(
                    status_code = status.as_u16(),
                    text_length = message.text.len(),
                    "slack_delivery_sent"
                );
                DeliveryOutcome::Sent
            }
            Err(DeliveryError::Transport(e)) if e.is_timeout() => {
                error!(
                    timeout_ms = self.config.slack_timeout_ms,
                    error = %e,
                    "slack_delivery_timeout"
                );
                DeliveryOutcome::Failed
            }
            Err(e) => {
                error!(error = %e, "slack_delivery_failed");
                DeliveryOutcome::Failed
            }
        }
    }

    async fn post(&self, url: &str, message: &SlackMessage) -> Result<StatusCode, DeliveryError> {
        let response = self.client.post(url).json(message).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status(status));
        }

        Ok(status)
    }
}
