//! Chat-completion client backing the drafting helpers in the admin panel.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::config::AiSettings;

use super::error::InfraError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct CompletionError {
    error: CompletionErrorBody,
}

#[derive(Debug, Deserialize)]
struct CompletionErrorBody {
    message: String,
}

pub struct AiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl AiClient {
    pub fn new(settings: &AiSettings) -> Result<Self, InfraError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| InfraError::upstream("ai", err.to_string()))?;
        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
        })
    }

    /// Run one chat completion and return the assistant text with any code
    /// fences stripped.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, InfraError> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user},
            ],
        });

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| InfraError::upstream("ai", err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| InfraError::upstream("ai", err.to_string()))?;

        if !status.is_success() {
            // Surface the provider's own message when it sends one.
            let detail = serde_json::from_str::<CompletionError>(&text)
                .map(|err| err.error.message)
                .unwrap_or(text);
            return Err(InfraError::upstream("ai", detail));
        }

        let parsed: CompletionResponse = serde_json::from_str(&text)
            .map_err(|err| InfraError::upstream("ai", format!("unexpected response: {err}")))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| InfraError::upstream("ai", "response carried no choices"))?;

        Ok(strip_code_fences(&content).to_string())
    }
}

/// Models often wrap JSON answers in Markdown fences; strip one outer pair.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    rest.strip_suffix("```").map(str::trim).unwrap_or(trimmed)
}
