use super::{Backend, CompletionRequest};
use crate::config::ClaudeConfig;
use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::debug;

const NAME: &str = "claude";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [UserMessage<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Messages API backend. The whole prompt goes in one user message.
pub struct ClaudeBackend {
    api_key: String,
    http: reqwest::Client,
    base_url: String,
    max_tokens: u32,
}

impl ClaudeBackend {
    pub fn new(api_key: &str, config: &ClaudeConfig) -> Self {
        Self {
            api_key: api_key.to_string(),
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_tokens: config.max_tokens,
        }
    }

    fn headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_str(&self.api_key)?);
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[async_trait]
impl Backend for ClaudeBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        let url = format!("{}/messages", self.base_url);

        let body = MessagesRequest {
            model: &request.model,
            max_tokens: self.max_tokens,
            messages: [UserMessage {
                role: "user",
                content: &request.prompt,
            }],
            system: request.system.as_deref(),
            temperature: request.temperature,
        };

        debug!(model = %request.model, "Claude messages request");

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(ProviderError::Api {
                backend: NAME,
                status,
                body,
            });
        }

        let message: MessagesResponse = response.json().await?;
        message
            .content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text.trim().to_string()),
                ContentBlock::Other => None,
            })
            .ok_or(ProviderError::EmptyResponse(NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend(server: &MockServer) -> ClaudeBackend {
        let config = ClaudeConfig {
            base_url: server.uri(),
            ..ClaudeConfig::default()
        };
        ClaudeBackend::new("claude-key", &config)
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "claude-3-7-sonnet-20250219".to_string(),
            system: None,
            prompt: "Template\n\nTitle A: X".to_string(),
            temperature: 0.0,
        }
    }

    #[tokio::test]
    async fn test_messages_request_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/messages"))
            .and(header("x-api-key", "claude-key"))
            .and(header("anthropic-version", "2023-06-01"))
            .and(body_partial_json(json!({
                "model": "claude-3-7-sonnet-20250219",
                "max_tokens": 1000,
                "messages": [{"role": "user", "content": "Template\n\nTitle A: X"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_1",
                "type": "message",
                "content": [{"type": "text", "text": "\n```json\n{\"winner\": \"C\"}\n```\n"}],
                "stop_reason": "end_turn"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = backend(&server).complete(&request()).await.unwrap();
        assert_eq!(text, "```json\n{\"winner\": \"C\"}\n```");
    }

    #[tokio::test]
    async fn test_skips_non_text_blocks() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [
                    {"type": "thinking", "thinking": "hmm"},
                    {"type": "text", "text": "B"}
                ]
            })))
            .mount(&server)
            .await;

        assert_eq!(backend(&server).complete(&request()).await.unwrap(), "B");
    }

    #[tokio::test]
    async fn test_empty_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": []})))
            .mount(&server)
            .await;

        let err = backend(&server).complete(&request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyResponse("claude")));
    }

    #[tokio::test]
    async fn test_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid x-api-key"))
            .mount(&server)
            .await;

        let err = backend(&server).complete(&request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Api { status: 401, .. }));
    }
}
