//! Outbound generation client.
//!
//! `GeminiClient` speaks the Gemini `generateContent` wire shape over a
//! blocking reqwest client with a fixed timeout, so a hung endpoint can
//! never stall the pipeline past the bound. Everything above it depends
//! only on the `GenerateClient` trait; tests substitute
//! `MockGenerateClient`.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use super::prompt::SELF_TEST_PROMPT;
use super::EnhanceError;

/// Single-call generation contract: prompt in, raw model text out.
pub trait GenerateClient: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, EnhanceError>;
}

impl<T: GenerateClient + ?Sized> GenerateClient for std::sync::Arc<T> {
    fn generate(&self, prompt: &str) -> Result<String, EnhanceError> {
        (**self).generate(prompt)
    }
}

// ═══════════════════════════════════════════════════════════
// Wire types
// ═══════════════════════════════════════════════════════════

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: u32,
    top_p: f64,
    max_output_tokens: u32,
}

#[derive(Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

/// Block-medium-and-above across all four harm categories.
fn conservative_safety_settings() -> Vec<SafetySetting> {
    const CATEGORIES: &[&str] = &[
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ];
    CATEGORIES
        .iter()
        .map(|category| SafetySetting {
            category,
            threshold: "BLOCK_MEDIUM_AND_ABOVE",
        })
        .collect()
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

// ═══════════════════════════════════════════════════════════
// GeminiClient
// ═══════════════════════════════════════════════════════════

/// HTTP client for the Gemini generateContent endpoint.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
            timeout_secs,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One lightweight probe call. Run once at startup; a failure here
    /// pins the enhancer Disabled for the process lifetime.
    pub fn self_test(&self) -> Result<(), EnhanceError> {
        let config = GenerationConfig {
            temperature: 0.1,
            top_k: 1,
            top_p: 1.0,
            max_output_tokens: 16,
        };
        self.call(SELF_TEST_PROMPT, config).map(|_| ())
    }

    fn call(&self, prompt: &str, config: GenerationConfig) -> Result<String, EnhanceError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: config,
            safety_settings: conservative_safety_settings(),
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                EnhanceError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                EnhanceError::Timeout(self.timeout_secs)
            } else {
                EnhanceError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EnhanceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| EnhanceError::ResponseParsing(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(EnhanceError::EmptyResponse);
        }
        Ok(text)
    }
}

impl GenerateClient for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, EnhanceError> {
        let config = GenerationConfig {
            temperature: 0.3,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
        };
        self.call(prompt, config)
    }
}

// ═══════════════════════════════════════════════════════════
// Mock client
// ═══════════════════════════════════════════════════════════

/// What the mock does on each `generate` call.
pub enum MockBehavior {
    Respond(String),
    FailConnection,
    FailTimeout,
    FailStatus(u16),
    RespondEmpty,
}

/// Mock generation client for tests — configurable behavior plus a call
/// counter so tests can assert on outbound I/O (or its absence).
pub struct MockGenerateClient {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockGenerateClient {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn respond(text: &str) -> Self {
        Self::new(MockBehavior::Respond(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GenerateClient for MockGenerateClient {
    fn generate(&self, _prompt: &str) -> Result<String, EnhanceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Respond(text) => Ok(text.clone()),
            MockBehavior::FailConnection => {
                Err(EnhanceError::Connection("http://mock".to_string()))
            }
            MockBehavior::FailTimeout => Err(EnhanceError::Timeout(30)),
            MockBehavior::FailStatus(status) => Err(EnhanceError::Api {
                status: *status,
                body: "mock error".to_string(),
            }),
            MockBehavior::RespondEmpty => Err(EnhanceError::EmptyResponse),
        }
    }
}
