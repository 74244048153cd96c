use async_trait::async_trait;
use crate::application::errors::BotError;
use crate::domain::entities::Message;

/// Code bound to one command name
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Handle one message and produce the reply text
    async fn handle(&self, message: &Message) -> Result<String, BotError>;
}
