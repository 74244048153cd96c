//! Domain layer - Core types and the seams to the outside world
//! 
//! This layer contains:
//! - Entities: Core business objects (User, Message, Command)
//! - Traits: Abstractions for infrastructure (Bot, Translator, CommandHandler)

pub mod entities;
pub mod traits;
