/// LLM Client — the single point of entry for all judge/generator calls in Parley.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All LLM interactions MUST go through the `Judge` trait defined here.
///
/// The judge is untrusted: its output is plain text that SHOULD contain JSON
/// but must be defensively parsed by the caller (see `strip_json_fences` and
/// `extract_json_object`). Transport retries (429/5xx) live here; the
/// interview core never retries — it falls back immediately.
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls in Parley.
/// Intentionally hardcoded to prevent accidental drift between rounds.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 2048;
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// The abstract language-model capability the interview core is written
/// against: one system prompt, one user prompt, one temperature, text out.
///
/// Carried in `AppState` as `Arc<dyn Judge>` so tests can substitute a
/// scripted or failing judge without any network.
#[async_trait]
pub trait Judge: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Concrete judge backed by the Anthropic Messages API.
/// Retries 429 and 5xx with exponential backoff before giving up.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a raw call to the API, returning the full response object.
    pub async fn call(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            temperature,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: user,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<AnthropicError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                llm_response.usage.input_tokens, llm_response.usage.output_tokens
            );

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl Judge for LlmClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let response = self.call(system, user, temperature).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(text.to_string())
    }
}

/// Calls the judge and deserializes the response as JSON, tolerating code
/// fences and surrounding prose. The prompt must instruct the model to
/// return valid JSON.
pub async fn call_json<T: DeserializeOwned>(
    judge: &dyn Judge,
    system: &str,
    user: &str,
    temperature: f32,
) -> Result<T, LlmError> {
    let text = judge.complete(system, user, temperature).await?;
    let stripped = strip_json_fences(&text);
    let object = extract_json_object(stripped).unwrap_or(stripped);
    serde_json::from_str(object).map_err(LlmError::Parse)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Extracts the outermost `{ ... }` span from text that may wrap the JSON
/// object in prose ("Here is the evaluation: {...} Hope that helps!").
/// Returns None if no object is present.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_extract_json_object_from_prose() {
        let input = "Sure! Here is the evaluation: {\"clarity\": 70} Hope that helps.";
        assert_eq!(extract_json_object(input), Some("{\"clarity\": 70}"));
    }

    #[test]
    fn test_extract_json_object_nested() {
        let input = "{\"a\": {\"b\": 1}}";
        assert_eq!(extract_json_object(input), Some("{\"a\": {\"b\": 1}}"));
    }

    #[test]
    fn test_extract_json_object_no_braces() {
        assert_eq!(extract_json_object("not json at all"), None);
    }

    #[test]
    fn test_extract_json_object_reversed_braces() {
        assert_eq!(extract_json_object("} oops {"), None);
    }
}
