use serde::{Deserialize, Serialize};

use crate::domain::Tone;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub character: String,
    #[serde(default)]
    pub fandom: String,
    #[serde(default)]
    pub tone: Tone,
}

impl GenerationRequest {
    pub fn new(character: impl Into<String>, fandom: impl Into<String>, tone: Tone) -> Self {
        Self {
            character: character.into(),
            fandom: fandom.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipGenerationRequest {
    pub character1: String,
    pub character2: String,
    #[serde(default)]
    pub tone: Tone,
}

/// Body returned by both generation endpoints.
///
/// A rate-limited reply carries only `error` and `retry_after`, so every
/// field is optional and a missing `success` reads as a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headcanons: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

impl GenerationResult {
    pub fn succeeded(character: impl Into<String>, headcanons: Vec<String>) -> Self {
        Self {
            success: true,
            headcanons: Some(headcanons),
            character: Some(character.into()),
            ..Self::default()
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_flat_json_body() {
        let request = GenerationRequest::new("Zuko", "", Tone::new("funny"));
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({"character": "Zuko", "fandom": "", "tone": "funny"})
        );
    }

    #[test]
    fn rate_limited_body_decodes_as_failure() {
        let body = r#"{"error": "Rate limit exceeded. Please try again later.", "retry_after": 60}"#;
        let result: GenerationResult = serde_json::from_str(body).expect("decode");
        assert!(!result.success);
        assert_eq!(result.retry_after, Some(60));
        assert!(result.headcanons.is_none());
    }

    #[test]
    fn success_body_keeps_headcanon_order() {
        let body = r#"{"success": true, "headcanons": ["B", "A"], "character": "X", "tone": "dark"}"#;
        let result: GenerationResult = serde_json::from_str(body).expect("decode");
        assert_eq!(result.headcanons, Some(vec!["B".to_string(), "A".to_string()]));
        assert_eq!(result.tone, Some(Tone::new("dark")));
    }
}
