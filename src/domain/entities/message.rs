use super::User;

/// An inbound chat message. Lives for one dispatch and is then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub chat_id: String,
    pub sender: User,
    pub text: String,
}

impl Message {
    pub fn new(chat_id: impl Into<String>, sender: User, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            sender,
            text: text.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.sender.id
    }

    pub fn username(&self) -> &str {
        self.sender.username_or_empty()
    }

    /// Text after the first `n` characters.
    ///
    /// Counts chars, not bytes, so a multi-byte character at the cut never
    /// panics. Shorter texts yield an empty string.
    pub fn text_after(&self, n: usize) -> &str {
        match self.text.char_indices().nth(n) {
            Some((idx, _)) => &self.text[idx..],
            None => "",
        }
    }
}
