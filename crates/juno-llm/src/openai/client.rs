// OpenAI-specific client implementation

use crate::traits::{GenerateClient, GenerateRequest, GenerateResponse, TokenUsage};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::Value;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// OpenAI client (HTTP direct, no SDK)
pub struct OpenAIClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl OpenAIClient {
    /// Create new client with API key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .context("Invalid API key format")?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: OPENAI_API_BASE.to_string(),
        })
    }

    /// Override the API base URL (local proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build chat completion request payload
    fn build_payload(&self, request: &GenerateRequest) -> Value {
        let mut messages: Vec<Value> = Vec::new();
        if let Some(system) = &request.system {
            messages.push(serde_json::json!({ "role": "system", "content": system }));
        }
        messages.push(serde_json::json!({ "role": "user", "content": request.prompt }));

        let mut payload = serde_json::json!({
            "model": request.model,
            "messages": messages,
        });

        let obj = payload.as_object_mut().expect("payload is an object");
        if let Some(temp) = request.options.temperature {
            obj.insert("temperature".to_string(), serde_json::json!(temp));
        }
        if let Some(max_tokens) = request.options.max_tokens {
            obj.insert("max_tokens".to_string(), serde_json::json!(max_tokens));
        }
        if request.options.json_output {
            obj.insert(
                "response_format".to_string(),
                serde_json::json!({ "type": "json_object" }),
            );
        }

        payload
    }
}

#[async_trait]
impl GenerateClient for OpenAIClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let payload = self.build_payload(&request);
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .context("Failed to send request to OpenAI")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("OpenAI API error ({}): {}", status, body));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .context("Failed to parse OpenAI response")?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("OpenAI response contained no choices"))?;

        let content = choice
            .message
            .content
            .ok_or_else(|| anyhow!("OpenAI response contained no content"))?;

        Ok(GenerateResponse {
            content,
            usage: completion.usage.map(|u| TokenUsage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::GenerateOptions;

    #[test]
    fn payload_includes_system_and_json_mode() {
        let client = OpenAIClient::new("sk-test").unwrap();
        let request = GenerateRequest::new("gpt-4o-mini", "hello")
            .with_system("be kind")
            .with_options(GenerateOptions::new().temperature(0.7).json());

        let payload = client.build_payload(&request);

        assert_eq!(payload["model"], "gpt-4o-mini");
        assert_eq!(payload["messages"][0]["role"], "system");
        assert_eq!(payload["messages"][1]["content"], "hello");
        assert_eq!(payload["temperature"], 0.7);
        assert_eq!(payload["response_format"]["type"], "json_object");
    }

    #[test]
    fn payload_omits_unset_options() {
        let client = OpenAIClient::new("sk-test").unwrap();
        let request = GenerateRequest::new("gpt-4o-mini", "hello");

        let payload = client.build_payload(&request);

        assert!(payload.get("temperature").is_none());
        assert!(payload.get("max_tokens").is_none());
        assert!(payload.get("response_format").is_none());
        assert_eq!(payload["messages"][0]["role"], "user");
    }
}
