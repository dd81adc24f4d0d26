use anyhow::Context;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::deserialize_option_u64;

#[derive(Debug, thiserror::Error)]
pub enum SlackError {
    #[error("Slack webhook error (status {status}): {body}")]
    WebhookStatus { status: u16, body: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SlackConfig {
    #[serde(rename = "slack_webhook_url")]
    pub webhook_url: Option<String>,
    #[serde(
        rename = "slack_timeout_secs",
        default,
        deserialize_with = "deserialize_option_u64"
    )]
    pub timeout_secs: Option<u64>,
}

/// Posts a digest to a Slack incoming webhook as a Block Kit message.
#[derive(Debug, Clone)]
pub struct SlackPublisher {
    client: Client,
    webhook_url: String,
}

impl SlackPublisher {
    /// Returns `None` when no webhook URL is configured, in which case the
    /// caller falls back to printing the digest.
    pub fn from_config(config: SlackConfig) -> Result<Option<Self>, SlackError> {
        let Some(webhook_url) = config.webhook_url.filter(|url| !url.trim().is_empty()) else {
            return Ok(None);
        };
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.unwrap_or(15)))
            .build()
            .context("Failed to build Slack HTTP client")?;
        Ok(Some(Self {
            client,
            webhook_url,
        }))
    }

    /// Delivers the whole block sequence in a single webhook request. A
    /// non-2xx response fails the run; there is no retry.
    pub async fn post(&self, blocks: &[String], date: NaiveDate) -> Result<(), SlackError> {
        let payload = build_payload(blocks, date);

        log::info!("posting {} blocks to slack...", blocks.len());
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .context("Slack webhook request failed")?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SlackError::WebhookStatus { status, body });
        }
        Ok(())
    }
}

/// Block Kit layout: dated header, divider, one mrkdwn section per digest
/// block, divider, context footer. Slack caps section text at 3000
/// characters, which is why the formatter's default limit matches.
pub fn build_payload(blocks: &[String], date: NaiveDate) -> Value {
    let mut message_blocks = vec![
        json!({
            "type": "header",
            "text": {
                "type": "plain_text",
                "text": format!("🤖 AI Weekly — {}", date.format("%B %d, %Y")),
                "emoji": true
            }
        }),
        json!({"type": "divider"}),
    ];

    for block in blocks {
        message_blocks.push(json!({
            "type": "section",
            "text": {"type": "mrkdwn", "text": block}
        }));
    }

    message_blocks.push(json!({"type": "divider"}));
    message_blocks.push(json!({
        "type": "context",
        "elements": [{
            "type": "mrkdwn",
            "text": "Curated by newsbrief • Powered by Claude"
        }]
    }));

    json!({"blocks": message_blocks})
}
