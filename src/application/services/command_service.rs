use std::sync::Arc;

use crate::application::errors::BotError;
use crate::application::handlers::{StartHandler, TranslateHandler};
use crate::domain::entities::{Command, CommandRegistry, Message};
use crate::domain::traits::Translator;
use crate::infrastructure::config::Settings;

/// Service for managing and executing commands
#[derive(Default)]
pub struct CommandService {
    registry: CommandRegistry,
}

impl CommandService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Command) {
        self.registry.register(command);
    }

    /// Register `/start` and `/t`
    pub fn register_defaults(&mut self, settings: Arc<Settings>, translator: Arc<dyn Translator>) {
        self.register(Command::new("start", StartHandler::new(settings.start_message.clone()))
            .with_description("Show the welcome message"));

        self.register(Command::new("t", TranslateHandler::new(settings, translator))
            .with_description("Translate the text after the command"));
    }

    /// Run the handler bound to `name`. `None` when no such command exists.
    pub async fn handle(&self, name: &str, message: &Message) -> Option<Result<String, BotError>> {
        let command = self.registry.get(name)?;
        Some(command.handler.handle(message).await)
    }

    pub fn commands(&self) -> Vec<&Command> {
        self.registry.all()
    }
}
