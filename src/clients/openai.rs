use async_trait::async_trait;
use openai::chat::{ChatCompletion, ChatCompletionMessage, ChatCompletionMessageRole};
use openai::Credentials;
use tracing::debug;

use crate::config::Settings;
use crate::error::{AppError, Result};

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u64 = 1200;

/// Chat-completion collaborator. Implementations return the assistant text or
/// an error; empty content counts as an error.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system: String, user: String) -> Result<String>;
}

pub struct OpenAiClient {
    settings: Settings,
}

impl OpenAiClient {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn from_env() -> Self {
        Self::new(Settings::from_env())
    }

    fn credentials(&self) -> Result<Credentials> {
        let api_key = self
            .settings
            .api_key
            .clone()
            .ok_or_else(|| AppError::External("Missing OPENAI_KEY".into()))?;
        Ok(Credentials::new(api_key, self.settings.base_url.clone()))
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, system: String, user: String) -> Result<String> {
        let creds = self.credentials()?;
        debug_log_preview(&system, &user);
        let messages = vec![
            message(ChatCompletionMessageRole::System, system),
            message(ChatCompletionMessageRole::User, user),
        ];

        let resp = ChatCompletion::builder(&self.settings.model, messages)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .credentials(creds)
            .create()
            .await
            .map_err(|e| AppError::External(e.to_string()))?;

        resp.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::External("completion returned no content".into()))
    }
}

fn message(role: ChatCompletionMessageRole, content: String) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role,
        content: Some(content),
        name: None,
        function_call: None,
        tool_calls: None,
        tool_call_id: None,
    }
}

fn debug_log_preview(system: &str, user: &str) {
    debug!(
        system.len = system.len(),
        user.len = user.len(),
        user.preview = %user.chars().take(80).collect::<String>(),
        "sending completion request"
    );
}
