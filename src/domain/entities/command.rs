use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::traits::CommandHandler;

/// Represents a bot command
pub struct Command {
    pub name: String,
    pub description: Option<String>,
    pub handler: Arc<dyn CommandHandler>,
}

impl Command {
    pub fn new(name: impl Into<String>, handler: impl CommandHandler + 'static) -> Self {
        Self {
            name: name.into(),
            description: None,
            handler: Arc::new(handler),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

/// Command registry for managing available commands
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
}

impl CommandRegistry {
    pub fn register(&mut self, command: Command) {
        self.commands.insert(command.name.clone(), command);
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Commands sorted by name
    pub fn all(&self) -> Vec<&Command> {
        let mut commands: Vec<&Command> = self.commands.values().collect();
        commands.sort_by(|a, b| a.name.cmp(&b.name));
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::application::errors::BotError;
    use crate::domain::entities::Message;

    struct Echo;

    #[async_trait]
    impl CommandHandler for Echo {
        async fn handle(&self, message: &Message) -> Result<String, BotError> {
            Ok(message.text.clone())
        }
    }

    #[test]
    fn test_registry_lookup_is_exact() {
        let mut registry = CommandRegistry::default();
        registry.register(Command::new("t", Echo));
        registry.register(Command::new("start", Echo).with_description("Greeting"));

        assert!(registry.get("t").is_some());
        assert!(registry.get("T").is_none());
        assert!(registry.get("translate").is_none());

        let names: Vec<&str> = registry.all().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["start", "t"]);
        assert_eq!(registry.get("start").unwrap().description.as_deref(), Some("Greeting"));
    }
}
