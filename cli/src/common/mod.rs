//! Common utilities shared across CLI commands.

pub mod error;
pub mod input;
pub mod script;

pub use error::CliResult;
