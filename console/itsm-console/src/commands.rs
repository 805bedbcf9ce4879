use crate::{guard_commands::GuardCommands, prefs_commands::PrefsCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Preference store operations
    Prefs {
        #[command(subcommand)]
        action: PrefsCommands,
    },

    /// Access checks against a saved session
    Guard {
        #[command(subcommand)]
        action: GuardCommands,
    },
}
