//! OpenAI chat-completions provider.

use async_trait::async_trait;
use grattis_core::config::GeneratorConfig;
use grattis_core::error::{GrattisError, Result};
use grattis_core::traits::Provider;
use grattis_core::types::Message;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(config: &GeneratorConfig) -> Self {
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &str { "openai" }

    async fn chat(&self, messages: &[Message]) -> Result<Option<String>> {
        let formatted_messages: Vec<serde_json::Value> = messages.iter().map(|m| {
            serde_json::json!({
                "role": m.role.to_string(),
                "content": m.content,
            })
        }).collect();

        let body = serde_json::json!({
            "model": self.model,
            "messages": formatted_messages,
        });

        let resp = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                GrattisError::Http(format!("OpenAI connection failed ({}): {e}", self.base_url))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(GrattisError::Provider(format!("OpenAI API error {status}: {text}")));
        }

        let json: serde_json::Value = resp.json().await
            .map_err(|e| GrattisError::Http(e.to_string()))?;

        // A refusal or filtered completion comes back without content;
        // surface that as None rather than an error.
        let content = json["choices"][0]["message"]["content"].as_str().map(String::from);
        tracing::debug!(
            "chat completion via {}: {} chars",
            self.model,
            content.as_deref().map_or(0, str::len)
        );
        Ok(content)
    }
}
