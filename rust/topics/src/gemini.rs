//! Remote topic generation through the Gemini `generateContent` REST API.

use std::time::Duration;

use async_trait::async_trait;
use imposter_engine::topic::{Topic, TopicProvider, TopicSelector};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::local::LocalProvider;
use crate::wordbank;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Optional model override.
pub const MODEL_ENV: &str = "GEMINI_MODEL";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const GENERIC_PROMPT: &str = "Generate a random secret word for a game of Imposter (Spyfall). \
The word should be a common object, place, or profession that everyone knows. \
Provide a broader category for it.";

/// Reasons a remote request did not produce a topic. Never leaves this crate's
/// providers; every variant ends in a local fallback.
#[derive(Debug, Error)]
pub enum TopicError {
    #[error("no API key in GEMINI_API_KEY")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response contained no text")]
    EmptyResponse,
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("generated {0} is blank")]
    BlankField(&'static str),
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeneratedTopic {
    category: String,
    word: String,
}

/// Provider asking Gemini for a fresh topic, with the local word bank as a
/// safety net.
///
/// Local selectors (`LOCAL_RANDOM` and built-in category names) are served
/// from the word bank without touching the network. A missing key or any
/// failure of the remote call is logged and answered with a random local
/// topic.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
    fallback: LocalProvider,
}

impl GeminiProvider {
    pub fn new(api_key: Option<String>, fallback: LocalProvider) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "could not configure HTTP client, using defaults");
                reqwest::Client::new()
            });
        Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fallback,
        }
    }

    /// Reads the key from [`API_KEY_ENV`] and the model from [`MODEL_ENV`].
    pub fn from_env(fallback: LocalProvider) -> Self {
        Self::configured(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(MODEL_ENV).ok(),
            fallback,
        )
    }

    fn configured(
        api_key: Option<String>,
        model: Option<String>,
        fallback: LocalProvider,
    ) -> Self {
        let provider = Self::new(api_key, fallback);
        match model.as_deref().map(str::trim) {
            Some(m) if !m.is_empty() => provider.with_model(m),
            _ => provider,
        }
    }

    /// Points the provider at another base URL (scheme and host, no path).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<Topic, TopicError> {
        let key = self.api_key.as_deref().ok_or(TopicError::MissingApiKey)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        );
        let body = request_body(prompt);

        debug!(model = %self.model, "requesting generated topic");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(TopicError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        parse_generate_response(&text)
    }
}

#[async_trait]
impl TopicProvider for GeminiProvider {
    async fn fetch_topic(&self, selector: &TopicSelector) -> Topic {
        let prompt = match selector {
            TopicSelector::LocalRandom => return self.fallback.pick(None),
            TopicSelector::Named(name) if wordbank::is_local_category(name).is_some() => {
                return self.fallback.pick(Some(name));
            }
            TopicSelector::Named(name) => custom_prompt(name),
            TopicSelector::Generated => GENERIC_PROMPT.to_string(),
        };

        match self.generate(&prompt).await {
            Ok(topic) => {
                info!(category = %topic.category, "generated topic");
                topic
            }
            Err(e) => {
                warn!(error = %e, selector = %selector, "topic generation failed, using local word bank");
                self.fallback.pick(None)
            }
        }
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

fn custom_prompt(category: &str) -> String {
    format!(
        "Generate a secret word specifically for the category: \"{}\". \
The word should be a common object, place, or concept within this category that most people know.",
        category
    )
}

fn request_body(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "category": { "type": "STRING", "description": "The broad category." },
                    "word": { "type": "STRING", "description": "The specific secret word." }
                },
                "required": ["category", "word"]
            }
        }
    })
}

/// Extracts the topic from a raw `generateContent` response body.
///
/// ```
/// use imposter_topics::gemini::parse_generate_response;
///
/// let body = r#"{"candidates":[{"content":{"parts":[
///     {"text":"{\"category\":\"music\",\"word\":\"guitar\"}"}
/// ]}}]}"#;
/// let topic = parse_generate_response(body).unwrap();
/// assert_eq!(topic.category, "Music");
/// assert_eq!(topic.word, "Guitar");
/// ```
pub fn parse_generate_response(body: &str) -> Result<Topic, TopicError> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .filter(|t| !t.trim().is_empty())
        .ok_or(TopicError::EmptyResponse)?;

    let generated: GeneratedTopic = serde_json::from_str(&text)?;
    let category = capitalize(generated.category.trim());
    let word = capitalize(generated.word.trim());
    if category.is_empty() {
        return Err(TopicError::BlankField("category"));
    }
    if word.is_empty() {
        return Err(TopicError::BlankField("word"));
    }
    Ok(Topic::new(category, word))
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
