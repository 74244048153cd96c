//! Message handling - Routes inbound messages to command handlers

pub mod dispatcher;
pub mod parser;

pub use dispatcher::MessageDispatcher;
pub use parser::MessageParser;
