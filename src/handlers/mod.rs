//! Command Handlers module
//!
//! Handlers orchestrate one read-validate-write cycle each against the
//! entity store. They hold no state across calls.

mod click_handler;
mod commands;
mod conversion_handler;


pub use click_handler::ClickRegistrar;
pub use commands::{RecordConversionCommand, RegisterClickCommand};
pub use conversion_handler::ConversionMatcher;
