//! Command handlers for `/start` and `/t`

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::errors::BotError;
use crate::domain::entities::Message;
use crate::domain::traits::{CommandHandler, Translator};
use crate::infrastructure::config::Settings;

/// Reply sent when the translation endpoint fails
pub const TRANSLATION_FAILED_REPLY: &str = "Sorry, I could not translate that right now. Please try again later.";

/// Length of the `/t` prefix cut from the message text
const TRANSLATE_PREFIX_LEN: usize = 2;

/// Replies with the configured greeting, even when it is empty
pub struct StartHandler {
    start_message: String,
}

impl StartHandler {
    pub fn new(start_message: impl Into<String>) -> Self {
        Self {
            start_message: start_message.into(),
        }
    }
}

#[async_trait]
impl CommandHandler for StartHandler {
    async fn handle(&self, _message: &Message) -> Result<String, BotError> {
        Ok(self.start_message.clone())
    }
}

/// Translates everything after the two-character `/t` prefix
pub struct TranslateHandler {
    settings: Arc<Settings>,
    translator: Arc<dyn Translator>,
}

impl TranslateHandler {
    pub fn new(settings: Arc<Settings>, translator: Arc<dyn Translator>) -> Self {
        Self { settings, translator }
    }

    /// Text submitted for translation: a positional cut of the prefix, then
    /// the whitespace separating it from the payload.
    pub fn payload(message: &Message) -> &str {
        message.text_after(TRANSLATE_PREFIX_LEN).trim_start()
    }
}

#[async_trait]
impl CommandHandler for TranslateHandler {
    async fn handle(&self, message: &Message) -> Result<String, BotError> {
        let text = Self::payload(message);
        tracing::info!("{}:{}:{}", message.user_id(), message.username(), text);

        match self.translator
            .translate(text, &self.settings.source_lang, &self.settings.target_lang)
            .await
        {
            Ok(translation) => Ok(translation),
            Err(e) => {
                tracing::error!("Translation failed for {}: {}", message.user_id(), e);
                Ok(TRANSLATION_FAILED_REPLY.to_string())
            }
        }
    }
}
