//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod handler;
pub mod translator;

pub use bot::{Bot, BotInfo};
pub use handler::CommandHandler;
pub use translator::Translator;
