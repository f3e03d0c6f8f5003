//! # Generative Model Module
//!
//! Client for the Gemini `generateContent` endpoint. One single-turn chat
//! session per aura: the configured system prompt plus a user message holding
//! the comma-joined genre list, with fixed sampling parameters. The textual
//! reply is reduced to a typed [`AuraRecord`] by stripping the markdown code
//! fence and parsing the JSON inside.
//!
//! The client is an explicit configuration object passed to callers instead
//! of a module-level singleton, so tests and the CLI can construct their own.

use reqwest::Client;

use crate::{
    config,
    error::ApiError,
    types::{
        AuraRecord, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
        Part,
    },
    utils,
};

// Fixed sampling parameters for aura generation.
const AURA_TEMPERATURE: f64 = 1.0;
const AURA_TOP_P: f64 = 0.95;
const AURA_TOP_K: u32 = 64;
const AURA_MAX_OUTPUT_TOKENS: u32 = 8192;

/// Configuration for talking to the generative model API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub system_prompt: String,
}

impl GeminiClient {
    /// Builds a client from the `GEMINI_*` environment variables.
    ///
    /// # Panics
    ///
    /// Panics if any of `GEMINI_API_URL`, `GEMINI_API_KEY`, `GEMINI_MODEL` or
    /// `GEMINI_SYSTEM_PROMPT` is not set.
    pub fn from_env() -> Self {
        Self {
            api_url: config::gemini_apiurl(),
            api_key: config::gemini_api_key(),
            model: config::gemini_model(),
            system_prompt: config::gemini_system_prompt(),
        }
    }

    /// Generates an aura record for the given genre list.
    ///
    /// Sends one `generateContent` request and parses the first candidate's
    /// text through [`utils::extract_json`]. A reply that carries no
    /// candidates, no fenced JSON, or JSON that does not match the
    /// [`AuraRecord`] shape yields `ApiError::Parse`; callers must not cache
    /// anything in that case, so a bad reply never poisons a cache key.
    ///
    /// # Arguments
    ///
    /// * `genres` - Sampled genre list for the playlist
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(AuraRecord)` - The parsed aura
    /// - `Err(ApiError::Upstream)` - Network failure or non-2xx response
    /// - `Err(ApiError::Parse)` - Unusable model reply
    pub async fn generate_aura(&self, genres: &[String]) -> Result<AuraRecord, ApiError> {
        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: self.system_prompt.clone(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: genres.join(", "),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: AURA_TEMPERATURE,
                top_p: AURA_TOP_P,
                top_k: AURA_TOP_K,
                max_output_tokens: AURA_MAX_OUTPUT_TOKENS,
                response_mime_type: "text/plain".to_string(),
            },
        };

        let api_url = format!(
            "{uri}/models/{model}:generateContent",
            uri = &self.api_url,
            model = &self.model
        );

        let client = Client::new();
        let response = client
            .post(&api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let res = response.json::<GenerateContentResponse>().await?;

        let text = res
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| ApiError::Parse("model returned no candidates".to_string()))?;

        let value = utils::extract_json(&text)
            .ok_or_else(|| ApiError::Parse("model reply contained no valid JSON".to_string()))?;

        serde_json::from_value::<AuraRecord>(value).map_err(|e| ApiError::Parse(e.to_string()))
    }
}
