/// Gemini generateContent client
///
/// One request per analysis: a natural-language instruction plus the inline
/// JPEG payload, with a generation config that forces a JSON response
/// matching the fixed 7W schema. No retries, no caching, and no timeout
/// beyond the transport default.

use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::result::AnalysisResult;
use crate::config::Config;
use crate::locale::Language;

/// Hosted endpoint prefix; overridable for tests
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Marker the API uses in block reasons, finish reasons and error bodies
/// when the content safety filter fires
const SAFETY_MARKER: &str = "SAFETY";

/// Category sentinel when the user left the field empty
const AUTO_DETECT: &str = "Auto-detect";

/// Analysis failure taxonomy
///
/// Variants carry plain strings (not source errors) so the enum stays `Clone`
/// and can travel through the UI message loop. The controller reduces all of
/// this to exactly two user-facing messages: `Safety` maps to the localized
/// safety string, everything else to the generic one.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    #[error("content blocked by the safety filter")]
    Safety,
    #[error("API error: {0}")]
    Api(String),
    #[error("request failed: {0}")]
    Http(String),
    #[error("response contained no textual payload")]
    EmptyResponse,
    #[error("response did not match the 7W schema: {0}")]
    Schema(String),
}

/// Client for the 7W scene analysis call
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl AnalysisClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: GEMINI_BASE_URL.to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Point the client at a different endpoint prefix (mock server in tests)
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Run one 7W analysis over a JPEG payload
    pub async fn analyze(
        &self,
        jpeg: Vec<u8>,
        category: String,
        language: Language,
    ) -> Result<AnalysisResult, AnalysisError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: build_prompt(&category, language),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg",
                            data: base64::engine::general_purpose::STANDARD.encode(&jpeg),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        log::info!("requesting 7W analysis from {} ({} byte image)", self.model, jpeg.len());

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("analysis request failed with {status}: {body}");
            if body.contains(SAFETY_MARKER) {
                return Err(AnalysisError::Safety);
            }
            return Err(AnalysisError::Api(format!("HTTP {status}")));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Api(e.to_string()))?;

        if parsed.blocked_by_safety() {
            return Err(AnalysisError::Safety);
        }

        let text = parsed.first_text().ok_or(AnalysisError::EmptyResponse)?;
        serde_json::from_str(text).map_err(|e| AnalysisError::Schema(e.to_string()))
    }
}

/// Build the analysis instruction embedding language and target category
fn build_prompt(category: &str, language: Language) -> String {
    let category = if category.trim().is_empty() {
        AUTO_DETECT
    } else {
        category.trim()
    };

    format!(
        "Analyze this image strictly for Category Entry Points (CEPs) using the 7W Framework.\n\
         Language: {}.\n\
         Target Category: \"{}\".\n\
         Fields: why, when, where, while, withWhom, withWhat, how, summary, strategic_insight.\n\
         Keep the analysis professional and strategic for marketers.\n\
         Output JSON.",
        language.prompt_name(),
        category
    )
}

/// The fixed response schema: nine required strings plus an optional
/// string array of suggested categories
fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "why": { "type": "STRING" },
            "when": { "type": "STRING" },
            "where": { "type": "STRING" },
            "while": { "type": "STRING" },
            "withWhom": { "type": "STRING" },
            "withWhat": { "type": "STRING" },
            "how": { "type": "STRING" },
            "summary": { "type": "STRING" },
            "strategic_insight": { "type": "STRING" },
            "suggested_categories": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": [
            "why", "when", "where", "while", "withWhom",
            "withWhat", "how", "summary", "strategic_insight"
        ]
    })
}

// ── Wire types ──────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: &'static str,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Whether the request or the generated candidate was stopped by the
    /// safety filter
    fn blocked_by_safety(&self) -> bool {
        let prompt_blocked = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
            .is_some_and(|reason| reason.contains(SAFETY_MARKER));

        let candidate_blocked = self
            .candidates
            .iter()
            .filter_map(|c| c.finish_reason.as_deref())
            .any(|reason| reason.contains(SAFETY_MARKER));

        prompt_blocked || candidate_blocked
    }

    /// First text part of the first candidate, if any
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .find_map(|part| part.text.as_deref())
    }
}

#[derive(Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> AnalysisClient {
        AnalysisClient::new(&Config {
            api_key: "test-key".to_string(),
            model: "gemini-3-flash-preview".to_string(),
        })
        .with_base_url(base_url)
    }

    fn valid_payload_text() -> String {
        serde_json::json!({
            "why": "Morning energy ritual",
            "when": "Early weekday morning",
            "where": "Home kitchen",
            "while": "Preparing breakfast",
            "withWhom": "Family members",
            "withWhat": "Coffee machine and mugs",
            "how": "Rushed but comforting",
            "summary": "A busy morning kitchen scene",
            "strategic_insight": "Anchor the brand to the first-coffee moment."
        })
        .to_string()
    }

    fn text_response(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
    }

    #[test]
    fn test_prompt_falls_back_to_auto_detect() {
        let prompt = build_prompt("", Language::De);
        assert!(prompt.contains("Target Category: \"Auto-detect\""));
        assert!(prompt.contains("Language: German."));
    }

    #[test]
    fn test_prompt_embeds_trimmed_category_and_language() {
        let prompt = build_prompt("  Coffee ", Language::En);
        assert!(prompt.contains("Target Category: \"Coffee\""));
        assert!(prompt.contains("Language: English."));
    }

    #[tokio::test]
    async fn test_successful_analysis_parses_the_schema_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-3-flash-preview:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(serde_json::json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(text_response(&valid_payload_text())),
            )
            .mount(&server)
            .await;

        let result = test_client(&server.uri())
            .analyze(vec![0xFF, 0xD8, 0xFF], String::new(), Language::En)
            .await
            .unwrap();

        assert_eq!(result.summary, "A busy morning kitchen scene");
        assert_eq!(result.how, "Rushed but comforting");
        assert!(result.suggested_categories.is_none());
    }

    #[tokio::test]
    async fn test_error_body_with_safety_marker_classifies_as_safety() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_string(r#"{"error":{"message":"Blocked: SAFETY"}}"#),
            )
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .analyze(vec![0xFF, 0xD8], "Coffee".to_string(), Language::De)
            .await
            .unwrap_err();

        assert_eq!(err, AnalysisError::Safety);
    }

    #[tokio::test]
    async fn test_other_http_errors_classify_as_api() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .analyze(vec![0xFF, 0xD8], String::new(), Language::En)
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Api(_)));
    }

    #[tokio::test]
    async fn test_safety_finish_reason_classifies_as_safety() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "finishReason": "SAFETY" }]
            })))
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .analyze(vec![0xFF, 0xD8], String::new(), Language::En)
            .await
            .unwrap_err();

        assert_eq!(err, AnalysisError::Safety);
    }

    #[tokio::test]
    async fn test_prompt_block_reason_classifies_as_safety() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .analyze(vec![0xFF, 0xD8], String::new(), Language::De)
            .await
            .unwrap_err();

        assert_eq!(err, AnalysisError::Safety);
    }

    #[tokio::test]
    async fn test_missing_text_payload_is_an_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "content": { "parts": [] }, "finishReason": "STOP" }]
            })))
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .analyze(vec![0xFF, 0xD8], String::new(), Language::En)
            .await
            .unwrap_err();

        assert_eq!(err, AnalysisError::EmptyResponse);
    }

    #[tokio::test]
    async fn test_payload_missing_a_required_field_is_a_schema_error() {
        let incomplete = serde_json::json!({ "summary": "only a summary" }).to_string();

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&incomplete)))
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .analyze(vec![0xFF, 0xD8], String::new(), Language::En)
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Schema(_)));
    }
}
