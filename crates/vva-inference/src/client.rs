//! Vision chat-completions client.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{InferenceError, InferenceResult};

/// Default API base URL (OpenAI-compatible).
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for a vision-capable chat-completions service.
///
/// Holds one reusable HTTP connection pool; safe to share across requests.
pub struct VisionClient {
    api_key: String,
    base_url: String,
    client: Client,
}

/// Chat-completions request.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
}

/// One chat turn.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

impl ChatMessage {
    /// Build a system turn with plain text content.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: MessageContent::Text(text.into()),
        }
    }

    /// Build a user turn from mixed text/image parts.
    pub fn user(parts: Vec<ContentPart>) -> Self {
        Self {
            role: "user".to_string(),
            content: MessageContent::Parts(parts),
        }
    }
}

/// Message content: a bare string or a list of multimodal parts.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// One part of a multimodal user turn.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    /// Build a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Build an image part from a data URI or remote URL.
    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl { url: url.into() },
        }
    }
}

/// Image reference inside a content part.
#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Chat-completions response.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl VisionClient {
    /// Create a new client against the default API base.
    ///
    /// Fails when the credential is absent so a misconfigured deployment
    /// cannot start serving.
    pub fn new(api_key: impl Into<String>) -> InferenceResult<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API base (used by tests).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> InferenceResult<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(InferenceError::MissingCredential);
        }

        Ok(Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        })
    }

    /// Submit a chat completion and return the first choice's text.
    ///
    /// An empty or missing completion yields an empty string, not an
    /// error; only transport failures and non-2xx responses escalate.
    pub async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> InferenceResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatCompletionRequest {
            model,
            messages,
            max_tokens,
        };

        info!(model, turns = messages.len(), "Submitting chat completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::api(status.as_u16(), body));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        debug!(chars = content.len(), "Received completion");
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_missing_credential_rejected() {
        assert!(matches!(
            VisionClient::new(""),
            Err(InferenceError::MissingCredential)
        ));
    }

    #[test]
    fn test_multimodal_request_shape() {
        let messages = vec![
            ChatMessage::system("You are an analyst."),
            ChatMessage::user(vec![
                ContentPart::text("Describe the video."),
                ContentPart::image_url("data:image/jpeg;base64,AAAA"),
            ]),
        ];
        let request = ChatCompletionRequest {
            model: "gpt-4.1-mini",
            messages: &messages,
            max_tokens: 500,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["messages"][0]["content"], "You are an analyst.");
        assert_eq!(value["messages"][1]["content"][0]["type"], "text");
        assert_eq!(
            value["messages"][1]["content"][1]["image_url"]["url"],
            "data:image/jpeg;base64,AAAA"
        );
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({"model": "gpt-4.1-mini"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "A dog runs."}}
                ]
            })))
            .mount(&server)
            .await;

        let client = VisionClient::with_base_url("test-key", server.uri()).unwrap();
        let messages = vec![ChatMessage::user(vec![ContentPart::text("go")])];
        let text = client
            .complete("gpt-4.1-mini", &messages, 100)
            .await
            .unwrap();
        assert_eq!(text, "A dog runs.");
    }

    #[tokio::test]
    async fn test_empty_choices_yield_empty_string() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let client = VisionClient::with_base_url("test-key", server.uri()).unwrap();
        let messages = vec![ChatMessage::user(vec![ContentPart::text("go")])];
        let text = client
            .complete("gpt-4.1-mini", &messages, 100)
            .await
            .unwrap();
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = VisionClient::with_base_url("test-key", server.uri()).unwrap();
        let messages = vec![ChatMessage::user(vec![ContentPart::text("go")])];
        let err = client
            .complete("gpt-4.1-mini", &messages, 100)
            .await
            .unwrap_err();
        assert!(matches!(err, InferenceError::Api { status: 429, .. }));
    }
}
