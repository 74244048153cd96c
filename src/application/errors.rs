//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Telegram API error: {0}")]
    Api(String),

    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),
}

/// Configuration errors
///
/// Every variant is fatal: the process logs it and exits with status 1.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Failed to parse config: {0}")]
    Malformed(String),

    #[error("Missing required field: token")]
    MissingToken,
}

/// Translation endpoint errors
#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Translation request failed: {0}")]
    NetworkFailure(String),

    #[error("Translation endpoint returned {status}")]
    UpstreamError { status: u16 },

    #[error("Unexpected translation response: {0}")]
    DecodeFailure(String),
}
