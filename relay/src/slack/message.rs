//! Slack message rendering.
//!
//! Produces the mrkdwn summary posted to the webhook: a fixed header line,
//! a bulleted block of CloudEvent attributes, and the event data as pretty
//! JSON truncated to the configured character limit.

use serde::Serialize;

use crate::event::{EventEnvelope, CE_HEADER_PREFIX};

/// Slack incoming-webhook payload.
///
/// `channel` is omitted from the serialized body when unset; Slack treats an
/// explicit null differently from an absent field.
#[derive(Debug, Clone, Serialize)]
pub struct SlackMessage {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    pub username: String,
    pub icon_emoji: String,
}

/// Render the notification text for one envelope.
///
/// The serialized event data is measured in characters; when it exceeds
/// `data_limit` the block keeps the first `data_limit - 3` characters and
/// ends in `...`, followed by a note naming the limit. Limits below 3 clamp
/// the kept portion to empty rather than underflowing.
pub fn render_message(envelope: &EventEnvelope, data_limit: usize) -> String {
    let mut text = String::from("🌩️ *CloudEvent Received*\n\n");

    if envelope.has_metadata() {
        text.push_str("*CloudEvent Headers:*\n");
        for (key, value) in &envelope.metadata {
            let clean_key = key.strip_prefix(CE_HEADER_PREFIX).unwrap_or(key);
            let clean_key = title_case(&clean_key.replace('-', " "));
            text.push_str(&format!("• *{}:* `{}`\n", clean_key, value));
        }
        text.push('\n');
    }

    let data_json = serde_json::to_string_pretty(&envelope.payload.to_json())
        .unwrap_or_else(|_| "null".to_string());

    if data_json.chars().count() > data_limit {
        let truncated: String = data_json
            .chars()
            .take(data_limit.saturating_sub(3))
            .collect();
        text.push_str("*Event Data (truncated):*\n");
        text.push_str(&format!("```json\n{}...\n```", truncated));
        text.push_str(&format!("\n_Data truncated to {} characters_", data_limit));
    } else {
        text.push_str("*Event Data:*\n");
        text.push_str(&format!("```json\n{}\n```", data_json));
    }

    text
}

/// Uppercase every letter that follows a non-letter and lowercase the rest,
/// matching Python's `str.title`, which treats any non-alphabetic character
/// as a word boundary.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_was_letter = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_was_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_was_letter = true;
        } else {
            out.push(c);
            prev_was_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventEnvelope, EventPayload};
    use serde_json::json;

    fn envelope(metadata: &[(&str, &str)], payload: EventPayload) -> EventEnvelope {
        EventEnvelope {
            metadata: metadata
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            payload,
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("type"), "Type");
        assert_eq!(title_case("some key"), "Some Key");
        assert_eq!(title_case("ID"), "Id");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_any_non_letter_is_a_boundary() {
        assert_eq!(title_case("my_key"), "My_Key");
        assert_eq!(title_case("v2x"), "V2X");
        assert_eq!(title_case("a.b-c"), "A.B-C");
    }

    #[test]
    fn test_render_with_metadata_and_small_payload() {
        let envelope = envelope(
            &[("ce-type", "com.example.test"), ("ce-source", "svc")],
            EventPayload::Json(json!({"a": 1})),
        );

        let text = render_message(&envelope, 256);

        assert!(text.starts_with("🌩️ *CloudEvent Received*\n\n"));
        assert!(text.contains("*CloudEvent Headers:*\n"));
        assert!(text.contains("• *Type:* `com.example.test`\n"));
        assert!(text.contains("• *Source:* `svc`\n"));
        assert!(text.contains("*Event Data:*\n```json\n{\n  \"a\": 1\n}\n```"));
        assert!(!text.contains("truncated"));
    }

    #[test]
    fn test_render_hyphenated_key_becomes_spaced_title_case() {
        let envelope = envelope(
            &[("ce-data-content-type", "application/json")],
            EventPayload::Json(json!({})),
        );

        let text = render_message(&envelope, 256);

        assert!(text.contains("• *Data Content Type:* `application/json`\n"));
    }

    #[test]
    fn test_render_without_metadata_skips_headers_block() {
        let envelope = envelope(&[], EventPayload::Json(json!({"a": 1})));

        let text = render_message(&envelope, 256);

        assert!(!text.contains("*CloudEvent Headers:*"));
        assert!(text.contains("*Event Data:*"));
    }

    #[test]
    fn test_render_truncates_over_limit() {
        // Pretty JSON is "{\n  \"a\": 1\n}" (12 chars); limit 5 keeps the
        // first 2 chars and appends the ellipsis.
        let envelope = envelope(&[], EventPayload::Json(json!({"a": 1})));

        let text = render_message(&envelope, 5);

        assert!(text.contains("*Event Data (truncated):*\n```json\n{\n...\n```"));
        assert!(text.contains("_Data truncated to 5 characters_"));
    }

    #[test]
    fn test_render_truncated_block_is_exactly_limit_chars() {
        let envelope = envelope(
            &[],
            EventPayload::Json(json!({"key": "a long enough value to truncate"})),
        );
        let limit = 20;

        let text = render_message(&envelope, limit);

        let start = text.find("```json\n").unwrap() + "```json\n".len();
        let end = start + text[start..].find("\n```").unwrap();
        let block = &text[start..end];
        assert_eq!(block.chars().count(), limit);
        assert!(block.ends_with("..."));
    }

    #[test]
    fn test_render_limit_below_three_clamps_to_ellipsis_only() {
        let envelope = envelope(&[], EventPayload::Json(json!({"a": 1})));

        let text = render_message(&envelope, 0);

        assert!(text.contains("```json\n...\n```"));
        assert!(text.contains("_Data truncated to 0 characters_"));
    }

    #[test]
    fn test_render_at_limit_is_verbatim() {
        let envelope = envelope(&[], EventPayload::Json(json!({"a": 1})));
        let pretty = serde_json::to_string_pretty(&json!({"a": 1})).unwrap();

        let text = render_message(&envelope, pretty.chars().count());

        assert!(text.contains(&format!("*Event Data:*\n```json\n{}\n```", pretty)));
    }

    #[test]
    fn test_render_verbatim_payload_round_trips() {
        let value = json!({"a": 1, "nested": {"b": [1, 2, 3]}});
        let envelope = envelope(&[], EventPayload::Json(value.clone()));

        let text = render_message(&envelope, 4096);

        let start = text.find("```json\n").unwrap() + "```json\n".len();
        let end = start + text[start..].find("\n```").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text[start..end]).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_render_raw_text_fallback_payload() {
        let envelope = envelope(&[], EventPayload::RawText("\u{FFFD}\u{FFFD}".to_string()));

        let text = render_message(&envelope, 256);

        assert!(text.contains("raw_body"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_slack_message_omits_unset_channel() {
        let message = SlackMessage {
            text: "hello".to_string(),
            channel: None,
            username: "CloudEvent Bot".to_string(),
            icon_emoji: ":cloud:".to_string(),
        };

        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("channel").is_none());
        assert_eq!(json["username"], "CloudEvent Bot");
        assert_eq!(json["icon_emoji"], ":cloud:");
    }

    #[test]
    fn test_slack_message_includes_set_channel() {
        let message = SlackMessage {
            text: "hello".to_string(),
            channel: Some("#alerts".to_string()),
            username: "CloudEvent Bot".to_string(),
            icon_emoji: ":cloud:".to_string(),
        };

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["channel"], "#alerts");
    }
}
