use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    core::TermdeckError,
    provider::{definition_prompt, GeminiConfig, SYSTEM_INSTRUCTION},
};

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_HEADER: &str = "x-goog-api-key";

// Low temperature for factual consistency; zero thinking budget so flips
// stay fast.
const TEMPERATURE: f32 = 0.3;
const THINKING_BUDGET: u32 = 0;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn http_client() -> Result<Client, TermdeckError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| TermdeckError::Custom(format!("HTTP client build failed: {e}")))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: RequestContent<'a>,
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

impl<'a> RequestContent<'a> {
    fn text(text: &'a str) -> Self {
        Self { parts: vec![RequestPart { text }] }
    }
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate; empty when the model
    /// returned no usable content.
    fn text(&self) -> String {
        self.candidates
            .as_deref()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.as_deref())
            .map(|parts| {
                parts.iter().filter_map(|part| part.text.as_deref()).collect::<Vec<_>>().join("")
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// One definition request. Network, auth, quota, and malformed-response
/// failures all come back as [`TermdeckError`]; the caller decides how to
/// soften them.
pub async fn generate_definition(
    client: &Client,
    config: &GeminiConfig,
    term: &str,
    category: &str,
) -> Result<String, TermdeckError> {
    let prompt = definition_prompt(term, category);
    let request = GenerateContentRequest {
        system_instruction: RequestContent::text(SYSTEM_INSTRUCTION),
        contents: vec![RequestContent::text(&prompt)],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            thinking_config: ThinkingConfig { thinking_budget: THINKING_BUDGET },
        },
    };

    let url = format!("{}/{}:generateContent", ENDPOINT, config.model);
    let response = client
        .post(&url)
        .header(API_KEY_HEADER, &config.api_key)
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.error.message)
            .unwrap_or_else(|_| format!("HTTP {status}"));
        return Err(TermdeckError::Provider(message));
    }

    let body: GenerateContentResponse = response.json().await?;
    Ok(body.text())
}

/// Cheap reachability check for the status indicator: fetch the configured
/// model's metadata.
pub async fn probe(client: &Client, config: &GeminiConfig) -> Result<(), TermdeckError> {
    let url = format!("{}/{}", ENDPOINT, config.model);
    let response = client.get(&url).header(API_KEY_HEADER, &config.api_key).send().await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(TermdeckError::Provider(format!("HTTP {}", response.status())))
    }
}
