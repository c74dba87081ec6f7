//! Transcription client for a generative-AI speech API
//!
//! Sends the raw audio bytes inline (base64) with a prompt requesting
//! strict-JSON timed segments, then parses and validates the reply. The API
//! is a fallible black box: transport errors, quota errors, and malformed
//! bodies all surface as errors and discard any partially parsed segments.

use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TranscribeError};
use crate::validate::validate_segments;
use clipscribe_core::{Transcriber, TranscriptSegment};

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const PROMPT: &str = "Transcribe this audio. Respond with ONLY a JSON array of segments, \
each {\"id\": <integer, ascending from 0>, \"text\": <string>, \
\"start\": <seconds>, \"end\": <seconds>}. No prose, no markdown.";

/// Async transcription client
pub struct TranscriptionClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
}

#[derive(Serialize)]
struct InlineData<'a> {
    #[serde(rename = "mimeType")]
    mime_type: &'a str,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl TranscriptionClient {
    /// Create a client against the default endpoint and model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the API endpoint (tests, proxies)
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the model name
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Transcribe raw audio bytes, returning the crate's error type
    ///
    /// The `Transcriber` impl delegates here; call this directly when the
    /// distinction between API, transport, and validation failures matters.
    ///
    /// # Errors
    /// `TranscribeError::Api` on a non-2xx status (with a body snippet),
    /// `Http`/`Json` on transport or parse failures, `InvalidSegment` when
    /// the response shape cannot be trusted.
    pub async fn transcribe_audio(
        &self,
        audio: &[u8],
        mime_type: &str,
    ) -> Result<Vec<TranscriptSegment>> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: PROMPT },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type,
                            data: base64::engine::general_purpose::STANDARD.encode(audio),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        tracing::info!(bytes = audio.len(), mime_type, "requesting transcription");

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "transcription request failed");
            return Err(TranscribeError::Api {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let segments = parse_segments(&parsed)?;
        validate_segments(&segments)?;

        tracing::info!(segments = segments.len(), "transcription complete");
        Ok(segments)
    }
}

impl Transcriber for TranscriptionClient {
    async fn transcribe(
        &self,
        audio: &[u8],
        mime_type: &str,
    ) -> clipscribe_core::Result<Vec<TranscriptSegment>> {
        Ok(self.transcribe_audio(audio, mime_type).await?)
    }
}

/// Pull the segment array out of the first candidate's text part
fn parse_segments(response: &GenerateResponse) -> Result<Vec<TranscriptSegment>> {
    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.as_str())
        .ok_or_else(|| TranscribeError::MalformedResponse("no candidates in response".into()))?;

    let payload = strip_code_fence(text);
    if payload.is_empty() {
        return Err(TranscribeError::MalformedResponse(
            "empty transcription payload".into(),
        ));
    }
    Ok(serde_json::from_str(payload)?)
}

/// Strip a ```json ... ``` fence the model sometimes wraps around the payload
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(text: &str) -> GenerateResponse {
        GenerateResponse {
            candidates: vec![Candidate {
                content: CandidateContent {
                    parts: vec![CandidatePart {
                        text: text.to_string(),
                    }],
                },
            }],
        }
    }

    #[test]
    fn parses_plain_json_payload() {
        let response = response_with(
            r#"[{"id": 0, "text": "hello", "start": 0.0, "end": 1.5},
                {"id": 1, "text": "world", "start": 1.5, "end": 2.75}]"#,
        );
        let segments = parse_segments(&response).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].text, "world");
        assert_eq!(segments[1].end, 2.75);
    }

    #[test]
    fn strips_markdown_code_fence() {
        let response = response_with(
            "```json\n[{\"id\": 0, \"text\": \"hi\", \"start\": 0.0, \"end\": 0.8}]\n```",
        );
        let segments = parse_segments(&response).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "hi");
    }

    #[test]
    fn empty_candidates_is_malformed() {
        let response = GenerateResponse { candidates: vec![] };
        assert!(matches!(
            parse_segments(&response),
            Err(TranscribeError::MalformedResponse(_))
        ));
    }

    #[test]
    fn non_json_payload_is_an_error() {
        let response = response_with("Sure! Here is the transcription you asked for.");
        assert!(matches!(
            parse_segments(&response),
            Err(TranscribeError::Json(_))
        ));
    }

    #[test]
    fn fence_without_language_tag() {
        assert_eq!(strip_code_fence("```\n[]\n```"), "[]");
        assert_eq!(strip_code_fence("  [] "), "[]");
    }
}
