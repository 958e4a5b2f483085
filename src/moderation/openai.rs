// OpenAI moderation endpoint implementation.
//
// Calls `POST {base}/moderations` with a typed input list. The omni
// moderation models accept mixed text and image inputs in a single request
// and return one result per input, in input order.
//
// API docs: https://platform.openai.com/docs/api-reference/moderations

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::traits::{ModerationOutcome, Moderator};
use super::types::{ContentItem, ModerationRequest};

/// Moderation client for the OpenAI API (or a compatible gateway).
pub struct OpenAiModerator {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiModerator {
    /// Create a new moderation client with the given API key, base URL,
    /// and model name. A trailing slash on the base URL is tolerated.
    pub fn new(api_key: String, base_url: &str, model: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent("litmus/0.1 (content moderation client)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }
}

#[async_trait]
impl Moderator for OpenAiModerator {
    async fn moderate(&self, items: &[ContentItem]) -> Result<ModerationOutcome> {
        let url = format!("{}/moderations", self.base_url);

        let request = ModerationRequest {
            model: &self.model,
            input: items,
        };

        debug!(items = items.len(), model = %self.model, "Moderation request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to call moderation API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Moderation API returned {}: {}", status, body);
        }

        // Keep the body as raw JSON (reports embed it verbatim) and
        // decode the typed view leniently from the same value.
        let raw: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse moderation API response")?;

        let outcome = ModerationOutcome::from_raw(raw);

        debug!(
            results = outcome.response.results.len(),
            "Moderation response"
        );

        Ok(outcome)
    }
}
