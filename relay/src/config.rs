//! Configuration module for environment variable parsing.
//!
//! Reads all configuration from environment variables, matching the Python implementation.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Slack incoming-webhook URL; absent means delivery is disabled
    pub slack_webhook_url: Option<String>,

    /// Optional destination channel, omitted from the Slack payload when unset
    pub slack_channel: Option<String>,

    /// Display name for Slack messages
    pub slack_username: String,

    /// Emoji icon for Slack messages
    pub slack_icon_emoji: String,

    /// Maximum characters of serialized event data included in a message
    pub slack_data_limit: usize,

    /// Timeout in milliseconds for the outbound Slack POST
    pub slack_timeout_ms: u64,

    /// Port for the web server to listen on
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            slack_webhook_url: parse_optional("SLACK_WEBHOOK_URL"),

            slack_channel: parse_optional("SLACK_CHANNEL"),

            slack_username: env::var("SLACK_USERNAME")
                .unwrap_or_else(|_| "CloudEvent Bot".to_string()),

            slack_icon_emoji: env::var("SLACK_ICON_EMOJI")
                .unwrap_or_else(|_| ":cloud:".to_string()),

            slack_data_limit: env::var("SLACK_DATA_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(256),

            slack_timeout_ms: env::var("SLACK_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        }
    }
}

/// Read an optional variable, treating blank values as unset.
fn parse_optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
