// ABOUTME: AI draft generation for the carousel-wizard application
// ABOUTME: Requests slide drafts from the Gemini API and validates the returned JSON

use crate::errors::{CarouselError, Result};
use crate::slides::{validate_slide_list, Slide};
use log::{debug, info};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::ops::RangeInclusive;
use std::time::Duration;
use url::Url;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models/";

/// How many slides a generated draft must contain
pub const GENERATED_SLIDE_RANGE: RangeInclusive<usize> = 5..=7;

/// Anything that can draft slides for a topic
pub trait SlideGenerator {
    fn generate(&self, topic: &str) -> Result<Vec<Slide>>;
}

/// Configuration for the generation client
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 30000,
        }
    }
}

/// The instruction sent to the model for a topic
pub fn build_prompt(topic: &str) -> String {
    format!(
        "Create a high-engagement social media carousel about \"{}\".\n\
         The response must be a JSON array of 5 to 7 slides.\n\
         - Slide 1 should be a high-impact 'hook' headline.\n\
         - Intermediate slides should contain valuable insights or steps.\n\
         - The last slide must be a strong 'Call to Action'.\n\
         Keep text punchy and concise for visual cards.",
        topic.trim()
    )
}

fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING", "description": "A unique UUID or index string" },
                "headline": { "type": "STRING", "description": "The main punchy headline" },
                "body": { "type": "STRING", "description": "The supporting context or body text" }
            },
            "required": ["id", "headline", "body"]
        }
    })
}

/// Validate model output. Any defect rejects the whole draft.
pub fn parse_generated_slides(text: &str) -> Result<Vec<Slide>> {
    let slides: Vec<Slide> = serde_json::from_str(text.trim())
        .map_err(|e| CarouselError::GenerationError(format!("response is not a slide array: {}", e)))?;

    if !GENERATED_SLIDE_RANGE.contains(&slides.len()) {
        return Err(CarouselError::GenerationError(format!(
            "expected {} to {} slides, got {}",
            GENERATED_SLIDE_RANGE.start(),
            GENERATED_SLIDE_RANGE.end(),
            slides.len()
        )));
    }
    if let Some(i) = slides.iter().position(|s| s.headline.trim().is_empty()) {
        return Err(CarouselError::GenerationError(format!(
            "slide {} has no headline",
            i + 1
        )));
    }
    validate_slide_list(&slides).map_err(|e| CarouselError::GenerationError(e.to_string()))?;

    Ok(slides)
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Pull the model text out of a raw `generateContent` response body
pub fn extract_response_text(body: &str) -> Result<String> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| CarouselError::GenerationError(format!("malformed API response: {}", e)))?;
    response
        .text()
        .ok_or_else(|| CarouselError::GenerationError("API response had no text".to_string()))
}

/// Client for the Gemini `generateContent` REST endpoint
pub struct GeminiClient {
    client: Client,
    config: GenerationConfig,
}

impl GeminiClient {
    pub fn new(config: GenerationConfig) -> Result<Self> {
        if config.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
            return Err(CarouselError::ConfigError(
                "No API key configured; set GEMINI_API_KEY".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(CarouselError::FetchError)?;

        Ok(Self { client, config })
    }

    /// Full endpoint URL including the key
    pub fn request_url(&self) -> Result<Url> {
        let base = Url::parse(&self.config.endpoint)
            .map_err(|e| CarouselError::ConfigError(format!("Invalid endpoint: {}", e)))?;
        let mut url = base
            // "./" keeps a model name like "gemini-x:..." from parsing as a scheme
            .join(&format!("./{}:generateContent", self.config.model))
            .map_err(|e| CarouselError::ConfigError(format!("Invalid model name: {}", e)))?;
        if let Some(key) = &self.config.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }
}

impl SlideGenerator for GeminiClient {
    fn generate(&self, topic: &str) -> Result<Vec<Slide>> {
        if topic.trim().is_empty() {
            return Err(CarouselError::ValidationError(
                "Topic must not be empty".to_string(),
            ));
        }
        info!("Generating slides for topic {:?} with {}", topic.trim(), self.config.model);

        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(topic) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        });

        // Strip URLs from errors, the query string carries the key
        let response = self
            .client
            .post(self.request_url()?)
            .json(&body)
            .send()
            .map_err(|e| CarouselError::FetchError(e.without_url()))?;
        let status = response.status();
        let text = response
            .text()
            .map_err(|e| CarouselError::FetchError(e.without_url()))?;
        if !status.is_success() {
            return Err(CarouselError::GenerationError(format!(
                "HTTP error: {}",
                status
            )));
        }

        let model_text = extract_response_text(&text)?;
        debug!("Model returned {} bytes of slide JSON", model_text.len());
        parse_generated_slides(&model_text)
    }
}
