//! Message dispatcher - Routes messages to handlers

use crate::application::errors::BotError;
use crate::application::services::CommandService;
use crate::domain::entities::Message;
use crate::domain::traits::Bot;
use super::parser::MessageParser;

/// Stateless dispatcher: one message in, at most one reply out.
/// Nothing is kept between messages.
pub struct MessageDispatcher {
    parser: MessageParser,
    commands: CommandService,
}

impl MessageDispatcher {
    pub fn new(bot_username: impl Into<String>, commands: CommandService) -> Self {
        Self {
            parser: MessageParser::new(bot_username),
            commands,
        }
    }

    pub fn commands(&self) -> &CommandService {
        &self.commands
    }

    /// Route a message to its handler and send the reply to the originating
    /// chat.
    ///
    /// Returns the id of the sent reply, or `None` when the message is not a
    /// registered command and was ignored.
    pub async fn dispatch(&self, bot: &dyn Bot, message: Message) -> Result<Option<String>, BotError> {
        let Some(name) = self.parser.command_name(&message.text) else {
            return Ok(None);
        };

        let Some(result) = self.commands.handle(name, &message).await else {
            tracing::debug!("[{}] Ignoring unknown command /{}", message.chat_id, name);
            return Ok(None);
        };

        let reply = result.map_err(|e| {
            tracing::warn!("[{}] /{} failed: {}", message.chat_id, name, e);
            e
        })?;

        let message_id = bot.send_message(&message.chat_id, &reply).await?;
        Ok(Some(message_id))
    }
}
