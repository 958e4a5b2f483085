// Wire types for the moderation endpoint.
//
// The request/response shape is owned by the external service; these types
// mirror it. Deserialization is deliberately lenient: every response field
// is defaulted, so a missing or reshaped field degrades to "no verdict"
// instead of a parse error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single typed input to the moderation endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// Plain text content.
    Text { text: String },
    /// An image, delivered inline as a `data:` URL.
    ImageUrl { image_url: ImageUrl },
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl { url: url.into() },
        }
    }

    /// Short label for log lines and progress messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::ImageUrl { .. } => "image",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Request body for `POST /moderations`.
#[derive(Serialize)]
pub struct ModerationRequest<'a> {
    pub model: &'a str,
    pub input: &'a [ContentItem],
}

/// Response body. One result per input item, in input order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModerationResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub results: Vec<ModerationResult>,
}

/// The service's verdict for a single input item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModerationResult {
    #[serde(default)]
    pub flagged: bool,
    /// Per-category violation booleans (e.g. "violence": true).
    #[serde(default)]
    pub categories: HashMap<String, bool>,
    /// Per-category confidence scores in [0, 1].
    #[serde(default)]
    pub category_scores: HashMap<String, f64>,
}

impl ModerationResult {
    /// Categories the service marked as violated, most confident first.
    pub fn flagged_categories(&self) -> Vec<(String, f64)> {
        let mut hits: Vec<(String, f64)> = self
            .categories
            .iter()
            .filter(|(_, &hit)| hit)
            .map(|(name, _)| {
                let score = self.category_scores.get(name).copied().unwrap_or(0.0);
                (name.clone(), score)
            })
            .collect();
        hits.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_item_serializes_with_type_tag() {
        let item = ContentItem::text("hello");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"type": "text", "text": "hello"}));
    }

    #[test]
    fn image_item_serializes_with_nested_url() {
        let item = ContentItem::image("data:image/png;base64,AAAA");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "image_url",
                "image_url": {"url": "data:image/png;base64,AAAA"}
            })
        );
    }

    #[test]
    fn request_carries_model_and_input_array() {
        let items = vec![ContentItem::text("a"), ContentItem::image("data:x")];
        let request = ModerationRequest {
            model: "omni-moderation-latest",
            input: &items,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "omni-moderation-latest");
        assert_eq!(json["input"].as_array().unwrap().len(), 2);
        assert_eq!(json["input"][0]["type"], "text");
        assert_eq!(json["input"][1]["type"], "image_url");
    }

    #[test]
    fn flagged_categories_sort_by_score() {
        let json = serde_json::json!({
            "flagged": true,
            "categories": {"violence": true, "harassment": true, "sexual": false},
            "category_scores": {"violence": 0.2, "harassment": 0.9, "sexual": 0.7}
        });
        let result: ModerationResult = serde_json::from_value(json).unwrap();
        let hits = result.flagged_categories();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, "harassment");
        assert_eq!(hits[1].0, "violence");
    }
}
