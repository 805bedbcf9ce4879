//! itsm-console library
//!
//! Command definitions and execution for the `itsm-console` binary.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod guard_commands;
pub(crate) mod logger;
pub(crate) mod prefs_commands;
pub(crate) mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{ConsoleError, Result as ConsoleResult};
pub use guard_commands::GuardCommands;
pub use logger::initialize as initialize_logger;
pub use prefs_commands::PrefsCommands;
pub use runner::{open_store, run};
