//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the chat-completion call used to rewrite release notes.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::SummarizeError;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// The remote completion service, abstracted so callers can be exercised
/// against a stub without network access.
#[async_trait]
pub trait CompletionApi {
    async fn complete(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, SummarizeError>;
}

/// LLM API client for generating summaries. The credential is injected at
/// construction; there is no shared client state.
pub struct LlmClient {
    api_key: String,
    org_id: Option<String>,
    model_name: String,
}

impl LlmClient {
    pub fn new(api_key: String, org_id: Option<String>, model_name: Option<String>) -> Self {
        Self {
            api_key,
            org_id,
            model_name: model_name.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Sends the prompt to the chat-completions endpoint and returns the
    /// content of the first choice. No generation parameters are overridden
    /// and no client-side timeout is set; the transport defaults apply.
    pub async fn generate_summary(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, SummarizeError> {
        #[cfg(feature = "debug-logs")]
        info!("Using chat prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Generating summary with {} messages in prompt",
            prompt.len()
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": build_chat_messages(&prompt)
        });

        let client = Client::builder().build()?;

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| SummarizeError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| SummarizeError::HttpError(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                SummarizeError::HttpError(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        let response = client
            .post(CHAT_COMPLETIONS_URL)
            .headers(headers)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummarizeError::OpenAIError(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            SummarizeError::OpenAIError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        extract_summary(chat_response)
            .ok_or_else(|| SummarizeError::OpenAIError("No text in response".to_string()))
    }
}

#[async_trait]
impl CompletionApi for LlmClient {
    async fn complete(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, SummarizeError> {
        self.generate_summary(prompt).await
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    content: Option<String>,
}

/// Text content of the first completion choice, if any.
pub(crate) fn extract_summary(response: ChatResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
}

/// Build the chat-completions message payload from the typed prompt.
pub(crate) fn build_chat_messages(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .map(|msg| {
            let role_str = match msg.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                MessageRole::assistant => "assistant",
                MessageRole::function => "function",
                MessageRole::tool => "tool",
            };

            let content_val = match &msg.content {
                Content::Text(text) => json!(text),
                // Image inputs are never produced by this tool.
                Content::ImageUrl(_) => json!(""),
            };

            json!({
                "role": role_str,
                "content": content_val
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::build_prompt;

    #[test]
    fn test_build_chat_messages_preserves_roles_and_text() {
        let prompt = build_prompt("v1.2.3: fixed a crash");
        let messages = build_chat_messages(&prompt);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert!(
            messages[1]["content"]
                .as_str()
                .unwrap()
                .ends_with("v1.2.3: fixed a crash")
        );
    }

    #[test]
    fn test_extract_summary_takes_first_choice() {
        let response: ChatResponse = serde_json::from_str(
            r###"{
                "choices": [
                    {"message": {"role": "assistant", "content": "## New Features\n- thing"}},
                    {"message": {"role": "assistant", "content": "second"}}
                ]
            }"###,
        )
        .unwrap();

        assert_eq!(
            extract_summary(response).as_deref(),
            Some("## New Features\n- thing")
        );
    }

    #[test]
    fn test_extract_summary_empty_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(extract_summary(response).is_none());
    }

    #[test]
    fn test_extract_summary_null_content() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#,
        )
        .unwrap();
        assert!(extract_summary(response).is_none());
    }

    #[test]
    fn test_default_model_applies_when_unset() {
        let client = LlmClient::new("test_key".to_string(), None, None);
        assert_eq!(client.model_name(), DEFAULT_MODEL);

        let client = LlmClient::new("test_key".to_string(), None, Some("gpt-4o".to_string()));
        assert_eq!(client.model_name(), "gpt-4o");
    }
}
