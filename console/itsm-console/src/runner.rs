use crate::{
    commands::Commands,
    error::Result as ConsoleErrorResult,
    guard_commands::GuardCommands,
    prefs_commands::PrefsCommands,
};

use itsm_auth::{AuthGuard, AuthGuardRequirement, AuthState, RecordingNavigator};
use itsm_config::{Config, StorageKind};
use itsm_preferences::{
    FileStorage, MemoryStorage, PreferenceStore, TableSettingsPatch, UserPreferencesPatch,
};

use std::sync::Arc;

use log::{info, warn};
use serde_json::{Value, json};

/// Executes one command and returns its JSON result.
pub fn run(command: Commands, config: &Config) -> ConsoleErrorResult<Value> {
    match command {
        Commands::Prefs { action } => run_prefs(action, config),
        Commands::Guard { action } => run_guard(action, config),
    }
}

/// Opens the preference store on the medium named by `[preferences] storage`.
pub fn open_store(config: &Config) -> ConsoleErrorResult<PreferenceStore> {
    let store = match config.preferences.storage {
        StorageKind::File => {
            let dir = config.preferences_dir()?;
            PreferenceStore::with_storage(FileStorage::new(dir))
        }
        StorageKind::Memory => PreferenceStore::with_storage(MemoryStorage::new()),
        StorageKind::None => PreferenceStore::detached(),
    };

    if store.load_status().is_recovered() {
        warn!("Stored preferences were unusable; defaults are in effect");
    }

    Ok(store)
}

fn run_prefs(action: PrefsCommands, config: &Config) -> ConsoleErrorResult<Value> {
    let store = open_store(config)?;

    match action {
        PrefsCommands::Show => {}
        PrefsCommands::Set {
            theme,
            language,
            timezone,
            date_format,
            page_size,
            sidebar_collapsed,
            dashboard_layout,
        } => {
            let patch = UserPreferencesPatch {
                theme,
                language,
                timezone,
                date_format,
                page_size,
                sidebar_collapsed,
                dashboard_layout,
                ..Default::default()
            };
            if patch.is_empty() {
                warn!("prefs set called without any field; nothing changed");
            } else {
                store.update(patch);
            }
        }
        PrefsCommands::Table {
            table_id,
            columns,
            sort_field,
            sort_direction,
        } => {
            let patch = TableSettingsPatch {
                columns,
                sort_field,
                sort_direction,
            };
            store.update_table_settings(&table_id, patch);
            let table = store.get().table(&table_id).cloned().unwrap_or_default();
            return Ok(json!({ "tableId": table_id, "settings": table }));
        }
        PrefsCommands::Reset => {
            store.reset();
            info!("Preferences reset to defaults");
        }
    }

    Ok(serde_json::to_value(store.get())?)
}

fn run_guard(action: GuardCommands, config: &Config) -> ConsoleErrorResult<Value> {
    match action {
        GuardCommands::Check {
            session,
            no_require_auth,
            roles,
            permissions,
            any,
            redirect_to,
        } => {
            let state = AuthState::from_file(&session)?;
            let requirement = AuthGuardRequirement::new()
                .with_require_auth(!no_require_auth)
                .require_roles(roles)
                .require_permissions(permissions)
                .with_require_all(!any)
                .with_redirect_to(redirect_to.unwrap_or_else(|| config.auth.login_path.clone()));

            let navigator = Arc::new(RecordingNavigator::new());
            let guard = AuthGuard::new(Arc::new(state), Some(navigator.clone()));
            let decision = guard.evaluate(&requirement);

            let mut output = serde_json::to_value(&decision)?;
            if let Value::Object(ref mut fields) = output {
                fields.insert("redirects".to_string(), json!(navigator.visited()));
            }
            Ok(output)
        }
    }
}
