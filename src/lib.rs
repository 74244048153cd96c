//! Telegram bot that relays `/t <text>` to a translation endpoint and replies
//! with the result.

pub mod domain;
pub mod application;
pub mod infrastructure;
