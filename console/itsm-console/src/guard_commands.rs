use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum GuardCommands {
    /// Evaluate an access requirement for the user in a session file
    Check {
        /// JSON auth state: {"user": {...} | null, "isAuthenticated": bool}
        #[arg(long)]
        session: PathBuf,
        /// Allow visitors who are not signed in
        #[arg(long)]
        no_require_auth: bool,
        /// Required role (repeatable)
        #[arg(long = "role")]
        roles: Vec<String>,
        /// Required permission (repeatable)
        #[arg(long = "permission")]
        permissions: Vec<String>,
        /// Pass when any one listed role or permission is held
        #[arg(long)]
        any: bool,
        /// Redirect target for unauthenticated visitors (defaults to auth.login_path)
        #[arg(long)]
        redirect_to: Option<String>,
    },
}
