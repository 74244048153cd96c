//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Command registration and execution
//! - Handlers: The `/start` and `/t` commands
//! - Errors: Domain-specific errors
//! - Messaging: Command parsing and dispatching

pub mod errors;
pub mod handlers;
pub mod services;
pub mod messaging;
