use reqwest::Client;
use tracing::{debug, error};

use super::types::*;
use crate::error::{GeneratorError, Result};

pub const DEFAULT_BASE_URL: &str = "https://aipipe.org/openrouter/v1";

/// Client for an OpenRouter-compatible completion endpoint.
///
/// One request per call, no retries: a failed completion fails the round.
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    pub async fn chat_completion(&self, messages: Vec<ChatMessage>, model: &str) -> Result<String> {
        debug!(
            "Creating chat completion with {} messages, model {}",
            messages.len(),
            model
        );

        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if let Ok(error_resp) = serde_json::from_str::<CompletionApiError>(&error_text) {
                error!(
                    "Completion API error: {} (type: {:?})",
                    error_resp.error.message, error_resp.error.error_type
                );
                return Err(GeneratorError::Api {
                    message: error_resp.error.message,
                    status_code: Some(status.as_u16()),
                });
            }

            return Err(GeneratorError::Api {
                message: error_text,
                status_code: Some(status.as_u16()),
            });
        }

        let chat_response: ChatCompletionResponse = response.json().await?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GeneratorError::Api {
                message: "No completion returned".to_string(),
                status_code: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_chat_completion_returns_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "openai/gpt-4.1-nano"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "gen-1",
                "choices": [{
                    "message": {"role": "assistant", "content": "<html>hi</html>"},
                    "finish_reason": "stop"
                }],
                "model": "openai/gpt-4.1-nano"
            })))
            .mount(&server)
            .await;

        let client = OpenRouterClient::new("key".to_string(), server.uri());
        let content = client
            .chat_completion(
                vec![ChatMessage::user("Create a GitHub Pages app for: x")],
                "openai/gpt-4.1-nano",
            )
            .await
            .unwrap();
        assert_eq!(content, "<html>hi</html>");
    }

    #[tokio::test]
    async fn test_chat_completion_surfaces_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(402).set_body_string(
                r#"{"error": {"message": "Insufficient credits", "type": "payment"}}"#,
            ))
            .mount(&server)
            .await;

        let client = OpenRouterClient::new("key".to_string(), server.uri());
        let err = client
            .chat_completion(vec![ChatMessage::user("x")], "openai/gpt-4.1-nano")
            .await
            .unwrap_err();

        match err {
            GeneratorError::Api {
                message,
                status_code,
            } => {
                assert_eq!(message, "Insufficient credits");
                assert_eq!(status_code, Some(402));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_chat_completion_empty_choices_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "gen-1",
                "choices": [],
                "model": "openai/gpt-4.1-nano"
            })))
            .mount(&server)
            .await;

        let client = OpenRouterClient::new("key".to_string(), server.uri());
        let err = client
            .chat_completion(vec![ChatMessage::user("x")], "openai/gpt-4.1-nano")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No completion returned"));
    }
}
