//! Message parser - Extracts command names from raw message text

/// Recognises `/name` and `/name@botname` at the start of a message
pub struct MessageParser {
    command_prefix: char,
    bot_username: String,
}

impl MessageParser {
    pub fn new(bot_username: impl Into<String>) -> Self {
        Self {
            command_prefix: '/',
            bot_username: bot_username.into(),
        }
    }

    /// Command name addressed to this bot, if the text is a command.
    ///
    /// A `@botname` suffix naming another bot means the command is not ours.
    pub fn command_name<'a>(&self, text: &'a str) -> Option<&'a str> {
        let first = text.split_whitespace().next()?;
        if !text.starts_with(first) {
            return None;
        }

        let cmd_text = first.strip_prefix(self.command_prefix)?;
        let (name, target) = match cmd_text.split_once('@') {
            Some((name, target)) => (name, Some(target)),
            None => (cmd_text, None),
        };

        if let Some(target) = target {
            if !self.bot_username.is_empty() && !target.eq_ignore_ascii_case(&self.bot_username) {
                return None;
            }
        }

        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}
