//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Logging: stderr and log file output
//! - Translate: The translation endpoint client
//! - Adapters: Platform integrations (Telegram)

pub mod config;
pub mod logging;
pub mod translate;
pub mod adapters;
