// Moderator trait — the swap-ready abstraction.
//
// This trait defines the interface for submitting content to a moderation
// provider. The hosted omni-moderation endpoint is the only implementation
// today; keeping it behind a trait means a different provider can be swapped
// in without touching path resolution or reporting.

use anyhow::Result;
use async_trait::async_trait;

use super::types::{ContentItem, ModerationResponse, ModerationResult};

/// What one API call produced: the raw response body verbatim, plus a
/// lenient typed view of it. The raw value is what reports embed.
#[derive(Debug, Clone)]
pub struct ModerationOutcome {
    pub raw: serde_json::Value,
    pub response: ModerationResponse,
}

impl ModerationOutcome {
    /// Decode a raw response body, tolerating malformed payloads.
    ///
    /// A body that doesn't match the expected shape decodes to an empty
    /// result list; downstream treats that as "no verdict", not an error.
    pub fn from_raw(raw: serde_json::Value) -> Self {
        let response = serde_json::from_value(raw.clone()).unwrap_or_default();
        Self { raw, response }
    }

    /// The result for the i-th input item, if the service returned one.
    pub fn result_at(&self, index: usize) -> Option<&ModerationResult> {
        self.response.results.get(index)
    }
}

/// Trait for submitting content to a moderation provider. Implementations
/// are async because providers are remote HTTP services.
#[async_trait]
pub trait Moderator: Send + Sync {
    /// Submit a batch of content items in a single request.
    /// Results come back in input order.
    async fn moderate(&self, items: &[ContentItem]) -> Result<ModerationOutcome>;
}
