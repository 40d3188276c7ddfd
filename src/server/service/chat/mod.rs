//! Event assistant backed by an OpenAI-compatible chat-completions API.

pub mod prompt;

use chrono::Utc;
use reqwest::StatusCode;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::{
    model::chat::ChatRole,
    server::{
        config::ChatConfig, data::event::EventRepository, error::AppError,
        model::chat::ChatParams, service::chat::prompt::build_system_prompt,
    },
};

/// Upper bound on events rendered into the prompt.
const MAX_PROMPT_EVENTS: u64 = 100;
const MAX_REPLY_TOKENS: u32 = 600;
const TEMPERATURE: f32 = 0.7;

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct CompletionMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    config: &'a ChatConfig,
}

impl<'a> ChatService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        config: &'a ChatConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            config,
        }
    }

    /// Answers a visitor's question about upcoming events.
    ///
    /// # Returns
    /// - `Ok(String)` - The assistant's reply
    /// - `Err(AppError::ServiceUnavailable)` - No API key configured
    /// - `Err(AppError::BadGateway)` - Upstream request failed or returned no answer
    pub async fn reply(&self, params: ChatParams) -> Result<String, AppError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(AppError::ServiceUnavailable(
                "The chat assistant is not available".to_string(),
            ));
        };

        let events = EventRepository::new(self.db)
            .get_upcoming_approved(Utc::now(), MAX_PROMPT_EVENTS)
            .await?;

        let request = CompletionRequest {
            model: &self.config.model,
            messages: build_messages(build_system_prompt(&events), params),
            max_tokens: MAX_REPLY_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .http_client
            .post(format!(
                "{}/chat/completions",
                self.config.api_url.trim_end_matches('/')
            ))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::BadGateway(format!("Chat request failed: {}", e)))?;

        match response.status() {
            StatusCode::OK => {
                let body = response.json::<CompletionResponse>().await.map_err(|e| {
                    AppError::BadGateway(format!("Failed to parse chat response: {}", e))
                })?;

                body.choices
                    .into_iter()
                    .next()
                    .map(|choice| choice.message.content.trim().to_string())
                    .filter(|reply| !reply.is_empty())
                    .ok_or_else(|| AppError::BadGateway("Chat response had no answer".to_string()))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(AppError::BadGateway(format!(
                    "Chat API returned {}: {}",
                    status, body
                )))
            }
        }
    }
}

/// System prompt first, then the retained history, then the new message.
fn build_messages(system_prompt: String, params: ChatParams) -> Vec<CompletionMessage> {
    let mut messages = Vec::with_capacity(params.history.len() + 2);
    messages.push(CompletionMessage {
        role: "system".to_string(),
        content: system_prompt,
    });
    messages.extend(params.history.into_iter().map(|turn| CompletionMessage {
        role: match turn.role {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
        .to_string(),
        content: turn.content,
    }));
    messages.push(CompletionMessage {
        role: "user".to_string(),
        content: params.message,
    });

    messages
}
