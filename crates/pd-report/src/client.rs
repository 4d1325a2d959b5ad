//! Blocking client for the hosted text-generation REST surface.
//!
//! The service exposes two endpoints we use:
//! - `GET  /v1beta/models?key=K` lists models with their supported
//!   generation methods;
//! - `POST /v1beta/{model}:generateContent?key=K` runs one prompt.
//!
//! Both frontends call this from a synchronous context (the CLI directly,
//! the UI from a worker thread), so the blocking reqwest client fits.

use crate::error::{ReportError, ReportResult};
use crate::model_select::{select_model, ReportPhase, RETRY_FALLBACK_MODEL};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// The service guarantees no timeout of its own; cap requests here.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Generation method a model must support to be usable for reports.
const GENERATE_CONTENT: &str = "generateContent";

/// A successfully generated report and the model that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedReport {
    pub model_id: String,
    pub text: String,
}

pub struct ReportClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl ReportClient {
    /// Build a client for the given credential.
    ///
    /// An empty (or whitespace) credential fails immediately with
    /// `MissingCredential`, before any network traffic.
    pub fn new(api_key: &str) -> ReportResult<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ReportError::MissingCredential);
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ReportError::RemoteCallFailed {
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            http,
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different service root (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// List the identifiers of models that support content generation.
    pub fn list_generation_models(&self) -> ReportResult<Vec<String>> {
        let url = format!("{}/v1beta/models", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ReportError::RemoteCallFailed {
                message: format!("model listing failed: {e}"),
            })?;
        let list: ModelList = response.json().map_err(|e| ReportError::RemoteCallFailed {
            message: format!("model listing returned an unreadable body: {e}"),
        })?;

        Ok(list
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|method| method == GENERATE_CONTENT)
            })
            .map(|m| m.name)
            .collect())
    }

    /// Run one prompt against one model.
    fn generate(&self, model: &str, prompt: &str) -> ReportResult<String> {
        let url = format!("{}/v1beta/{}:generateContent", self.base_url, model);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ReportError::RemoteCallFailed {
                message: format!("{model}: {e}"),
            })?;
        let body: GenerateResponse =
            response.json().map_err(|e| ReportError::RemoteCallFailed {
                message: format!("{model} returned an unreadable body: {e}"),
            })?;

        non_empty_text(&body)
    }

    /// Full report flow: discover models, select one, generate.
    ///
    /// On a transport-level failure of the selected model the call is
    /// retried exactly once against [`RETRY_FALLBACK_MODEL`] (skipped when
    /// that model was the one selected). An empty response is not retried.
    pub fn generate_report(
        &self,
        prompt: &str,
        mut on_phase: Option<&mut dyn FnMut(ReportPhase)>,
    ) -> ReportResult<GeneratedReport> {
        let mut emit = |phase: ReportPhase| {
            if let Some(cb) = on_phase.as_deref_mut() {
                cb(phase);
            }
        };

        // Credential validity is only provable server-side; the phase marks
        // the first authenticated request.
        emit(ReportPhase::Authenticating);
        emit(ReportPhase::DiscoveringModels);
        let available = self.list_generation_models()?;
        let selected = select_model(&available)?.to_string();
        tracing::debug!(model = %selected, candidates = available.len(), "model selected");

        emit(ReportPhase::Generating);
        match self.generate(&selected, prompt) {
            Ok(text) => Ok(GeneratedReport {
                model_id: selected,
                text,
            }),
            Err(ReportError::RemoteCallFailed { message }) if selected != RETRY_FALLBACK_MODEL => {
                tracing::warn!(
                    model = %selected,
                    error = %message,
                    "generation failed, retrying once against fallback model"
                );
                let text = self.generate(RETRY_FALLBACK_MODEL, prompt)?;
                Ok(GeneratedReport {
                    model_id: RETRY_FALLBACK_MODEL.to_string(),
                    text,
                })
            }
            Err(e) => Err(e),
        }
    }
}

// ---- wire types ----

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelEntry {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Map a response body to its report text, treating blank output as a
/// failure rather than a silent empty report.
fn non_empty_text(body: &GenerateResponse) -> ReportResult<String> {
    let text = body.text();
    if text.trim().is_empty() {
        Err(ReportError::EmptyResponse)
    } else {
        Ok(text)
    }
}

impl GenerateResponse {
    /// Concatenated text of the first candidate's parts.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credential_is_rejected_before_any_io() {
        assert!(matches!(
            ReportClient::new(""),
            Err(ReportError::MissingCredential)
        ));
        assert!(matches!(
            ReportClient::new("   "),
            Err(ReportError::MissingCredential)
        ));
    }

    #[test]
    fn credential_is_trimmed() {
        let client = ReportClient::new("  key-123  ").unwrap();
        assert_eq!(client.api_key, "key-123");
    }

    #[test]
    fn model_list_parses_and_filters_by_generation_method() {
        let body = r#"{
            "models": [
                {"name": "models/gemini-1.5-flash",
                 "supportedGenerationMethods": ["generateContent", "countTokens"]},
                {"name": "models/embedding-001",
                 "supportedGenerationMethods": ["embedContent"]},
                {"name": "models/no-methods"}
            ]
        }"#;
        let list: ModelList = serde_json::from_str(body).unwrap();
        let usable: Vec<String> = list
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|g| g == GENERATE_CONTENT)
            })
            .map(|m| m.name)
            .collect();
        assert_eq!(usable, vec!["models/gemini-1.5-flash".to_string()]);
    }

    #[test]
    fn generate_response_concatenates_first_candidate_parts() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Part one. "}, {"text": "Part two."}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text(), "Part one. Part two.");
    }

    #[test]
    fn generate_response_without_candidates_is_empty() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
        assert!(matches!(
            non_empty_text(&response),
            Err(ReportError::EmptyResponse)
        ));
    }

    #[test]
    fn blank_candidate_text_maps_to_empty_response() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "  \n\t"}]}}
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            non_empty_text(&response),
            Err(ReportError::EmptyResponse)
        ));
    }

    #[test]
    fn usable_text_passes_through() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "Report body."}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(non_empty_text(&response).unwrap(), "Report body.");
    }

    #[test]
    fn request_body_matches_wire_format() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }
}
