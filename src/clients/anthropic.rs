use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{deserialize_option_u32, deserialize_option_u64};
use crate::newsletter::{ContentSource, SourceRequest};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const WEB_SEARCH_TOOL_TYPE: &str = "web_search_20250305";

#[derive(Debug, thiserror::Error)]
pub enum AnthropicError {
    #[error("Anthropic API error (status {status}): {body}")]
    ApiStatus { status: u16, body: String },
    #[error("Anthropic response contained no text content")]
    EmptyResponse,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Deserialize, Debug, Clone)]
pub struct AnthropicConfig {
    #[serde(rename = "anthropic_api_key")]
    pub api_key: String,
    #[serde(rename = "anthropic_model", default = "default_model")]
    pub model: String,
    #[serde(rename = "anthropic_base_url", default = "default_base_url")]
    pub base_url: String,
    #[serde(
        rename = "anthropic_timeout_secs",
        default,
        deserialize_with = "deserialize_option_u64"
    )]
    pub timeout_secs: Option<u64>,
    #[serde(
        rename = "search_max_uses",
        default,
        deserialize_with = "deserialize_option_u32"
    )]
    pub search_max_uses: Option<u32>,
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

/// Client for the Anthropic Messages API. Search requests attach the
/// server-side web search tool so the model gathers sources itself.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    base_url: String,
    model: String,
    search_max_uses: u32,
}

#[derive(Serialize, Debug)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<ToolSpec<'a>>,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize, Debug)]
struct ToolSpec<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    name: &'a str,
    max_uses: u32,
}

#[derive(Serialize, Debug)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

// Tool use and search result blocks carry no `text` field and are skipped.
#[derive(Deserialize, Debug)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicClient {
    pub fn new(config: AnthropicConfig) -> Result<Self, AnthropicError> {
        let mut headers = HeaderMap::new();
        let key_value = HeaderValue::from_str(&config.api_key)
            .context("Invalid ANTHROPIC_API_KEY for x-api-key header")?;
        headers.insert("x-api-key", key_value);
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs.unwrap_or(60)))
            .build()
            .context("Failed to build Anthropic HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            search_max_uses: config.search_max_uses.unwrap_or(5),
        })
    }
}

impl ContentSource for AnthropicClient {
    async fn complete(&self, request: SourceRequest) -> anyhow::Result<String> {
        let tools = if request.web_search {
            vec![ToolSpec {
                kind: WEB_SEARCH_TOOL_TYPE,
                name: "web_search",
                max_uses: self.search_max_uses,
            }]
        } else {
            Vec::new()
        };
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: request.max_tokens,
            tools,
            messages: vec![Message {
                role: "user",
                content: &request.instruction,
            }],
        };

        log::info!("requesting completion from {}...", self.model);
        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .json(&body)
            .send()
            .await
            .context("Anthropic messages request failed")?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AnthropicError::ApiStatus { status, body }.into());
        }

        let body = response.text().await.context("Anthropic messages body")?;
        let parsed: MessagesResponse =
            serde_json::from_str(&body).context("Anthropic messages JSON")?;

        let text = parsed
            .content
            .iter()
            .filter_map(|block| block.text.as_deref())
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(AnthropicError::EmptyResponse.into());
        }
        Ok(text)
    }
}
