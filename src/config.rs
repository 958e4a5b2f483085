use std::env;

use anyhow::Result;

/// Default endpoint for the hosted moderation API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default moderation model. Accepts both text and image inputs.
pub const DEFAULT_MODEL: &str = "omni-moderation-latest";

/// Central configuration loaded from environment variables.
///
/// The API key comes from the environment (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Bearer token for the moderation endpoint (OPENAI_API_KEY).
    pub api_key: String,
    /// API base URL (OPENAI_BASE_URL). Point this at a proxy or a
    /// compatible gateway; the client appends `/moderations`.
    pub base_url: String,
    /// Moderation model name (LITMUS_MODEL).
    pub model: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only the API key has no default; everything works against the
    /// hosted endpoint out of the box once the key is set.
    pub fn load() -> Result<Self> {
        Ok(Self {
            api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: env::var("LITMUS_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }

    /// Check that the API key is configured.
    /// Call this before any operation that talks to the moderation endpoint.
    pub fn require_api_key(&self) -> Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!(
                "OPENAI_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
