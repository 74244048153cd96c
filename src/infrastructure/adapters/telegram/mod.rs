//! Telegram adapter

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

use crate::application::errors::BotError;
use crate::domain::entities::{Command, Message as InboundMessage, User as Sender};
use crate::domain::traits::{Bot, BotInfo};

/// Telegram API base URL
pub const API_BASE: &str = "https://api.telegram.org";

/// Telegram update type
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    /// Convert into a domain message. Updates without text or without a
    /// sender carry nothing the dispatcher can act on.
    pub fn into_message(self) -> Option<InboundMessage> {
        let message = self.message?;
        let from = message.from?;
        let text = message.text?;

        let mut sender = Sender::new(from.id.to_string());
        if let Some(username) = from.username {
            sender = sender.with_username(username);
        }

        Some(InboundMessage::new(message.chat.id.to_string(), sender, text))
    }
}

/// Bot API response envelope
#[derive(Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

/// Telegram bot adapter
pub struct TelegramAdapter {
    token: String,
    client: Client,
    api_base: String,
    info: BotInfo,
}

impl TelegramAdapter {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            client: Client::new(),
            api_base: API_BASE.to_string(),
            info: BotInfo {
                id: "unknown".to_string(),
                name: "translator-bot".to_string(),
                username: "translator_bot".to_string(),
            },
        }
    }

    /// Use another Bot API server (local Bot API server, or a mock in tests)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the API URL for a method
    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    /// POST a JSON request to a Bot API method and unwrap the envelope
    async fn call<Req, Res>(&self, method: &str, request: &Req) -> Result<Res, BotError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let response = self.client
            .post(self.api_url(method))
            .json(request)
            .send()
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        let status = response.status();
        let data: ApiResponse<Res> = response
            .json()
            .await
            .map_err(|e| BotError::Parse(format!("{} ({}): {}", method, status, e)))?;

        if !data.ok {
            return Err(BotError::Api(format!(
                "{} failed ({}): {}",
                method,
                status,
                data.description.unwrap_or_default()
            )));
        }

        data.result
            .ok_or_else(|| BotError::Parse(format!("{}: missing result", method)))
    }

    /// Fetch bot info from Telegram API
    pub async fn fetch_bot_info(&mut self) -> Result<(), BotError> {
        #[derive(Deserialize)]
        struct BotInfoResponse {
            id: i64,
            first_name: String,
            username: Option<String>,
        }

        let data: BotInfoResponse = self.call("getMe", &serde_json::json!({})).await?;

        self.info = BotInfo {
            id: data.id.to_string(),
            name: data.first_name,
            username: data.username.unwrap_or_default(),
        };

        Ok(())
    }

    /// Fetch bot info, retrying network failures up to `max_attempts` times.
    /// API errors, such as a rejected token, are returned at once.
    pub async fn connect(&mut self, max_attempts: u32, backoff: Duration) -> Result<(), BotError> {
        let mut attempt = 1;
        loop {
            match self.fetch_bot_info().await {
                Err(BotError::Network(e)) if attempt < max_attempts => {
                    tracing::warn!("getMe failed (attempt {}/{}): {}, retrying in {:?}", attempt, max_attempts, e, backoff);
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    /// Get updates from Telegram using getUpdates API
    pub async fn get_updates(&self, offset: i64, timeout: i64) -> Result<Vec<Update>, BotError> {
        #[derive(Serialize)]
        struct GetUpdatesRequest {
            offset: i64,
            timeout: i64,
            allowed_updates: Vec<String>,
        }

        let request = GetUpdatesRequest {
            offset,
            timeout,
            allowed_updates: vec!["message".to_string()],
        };

        self.call("getUpdates", &request).await
    }

    /// Get the next update offset
    pub fn get_next_offset(updates: &[Update], current: i64) -> i64 {
        updates.iter()
            .map(|u| u.update_id + 1)
            .max()
            .unwrap_or(current)
    }

    /// Publish the command list shown in Telegram's command menu
    pub async fn register_commands(&self, commands: &[&Command]) -> Result<(), BotError> {
        #[derive(Serialize)]
        struct BotCommand {
            command: String,
            description: String,
        }

        #[derive(Serialize)]
        struct SetMyCommandsRequest {
            commands: Vec<BotCommand>,
        }

        let request = SetMyCommandsRequest {
            commands: commands.iter()
                .map(|c| BotCommand {
                    command: c.name.clone(),
                    description: c.description.clone().unwrap_or_else(|| c.name.clone()),
                })
                .collect(),
        };

        let _: bool = self.call("setMyCommands", &request).await?;

        tracing::info!("Registered {} bot commands with Telegram", commands.len());
        Ok(())
    }
}

#[async_trait]
impl Bot for TelegramAdapter {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<String, BotError> {
        #[derive(Serialize)]
        struct SendMessageRequest<'a> {
            chat_id: &'a str,
            text: &'a str,
        }

        #[derive(Deserialize)]
        struct MessageResult {
            message_id: i64,
        }

        tracing::debug!("Sending to {}: {}", chat_id, text);

        let request = SendMessageRequest { chat_id, text };
        let result: MessageResult = self.call("sendMessage", &request).await?;

        Ok(result.message_id.to_string())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(json: &str) -> Update {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_update_into_message() {
        let msg = update(r#"{
            "update_id": 10,
            "message": {
                "message_id": 1,
                "from": {"id": 42, "is_bot": false, "first_name": "Alice", "username": "alice"},
                "chat": {"id": -100, "type": "group"},
                "date": 1706529600,
                "text": "/t hola"
            }
        }"#)
        .into_message()
        .unwrap();

        assert_eq!(msg.chat_id, "-100");
        assert_eq!(msg.user_id(), "42");
        assert_eq!(msg.username(), "alice");
        assert_eq!(msg.text, "/t hola");
    }

    #[test]
    fn test_update_without_text_is_skipped() {
        let sticker = update(r#"{
            "update_id": 11,
            "message": {
                "message_id": 2,
                "from": {"id": 42, "is_bot": false, "first_name": "Alice"},
                "chat": {"id": 42, "type": "private"},
                "date": 1706529600
            }
        }"#);
        assert!(sticker.into_message().is_none());

        let edited = update(r#"{"update_id": 12}"#);
        assert!(edited.into_message().is_none());
    }

    #[test]
    fn test_next_offset() {
        let updates = vec![update(r#"{"update_id": 7}"#), update(r#"{"update_id": 9}"#)];
        assert_eq!(TelegramAdapter::get_next_offset(&updates, 0), 10);
        assert_eq!(TelegramAdapter::get_next_offset(&[], 10), 10);
    }

    #[test]
    fn test_api_url() {
        let adapter = TelegramAdapter::new("123:abc").with_api_base("http://127.0.0.1:8081/");
        assert_eq!(adapter.api_url("getMe"), "http://127.0.0.1:8081/bot123:abc/getMe");
    }
}
