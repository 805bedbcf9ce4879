use crate::{
    Language, MemoryStorage, PreferenceStore, SortDirection, TableSettings, TableSettingsPatch,
    Theme, UserPreferences, UserPreferencesPatch,
};

use std::collections::BTreeMap;

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

// =========================================================================
// get / update
// =========================================================================

#[test]
fn given_new_store_when_get_then_returns_defaults() {
    let store = PreferenceStore::detached();

    assert_eq!(store.get(), UserPreferences::default());
}

#[test]
fn given_partial_update_when_get_then_only_patched_fields_change() {
    // Given
    let store = PreferenceStore::detached();
    let before = store.get();

    // When
    store.update(UserPreferencesPatch {
        theme: Some(Theme::Dark),
        page_size: Some(50),
        ..Default::default()
    });

    // Then
    let after = store.get();
    assert_that!(after.theme, eq(Theme::Dark));
    assert_that!(after.page_size, eq(50));
    assert_that!(after.language, eq(before.language));
    assert_eq!(after.timezone, before.timezone);
    assert_eq!(after.dashboard_layout, before.dashboard_layout);
    assert_eq!(after.notifications, before.notifications);
}

#[test]
fn given_two_updates_when_get_then_earlier_fields_survive() {
    let store = PreferenceStore::detached();

    store.update(UserPreferencesPatch {
        language: Some(Language::EnUs),
        ..Default::default()
    });
    store.update(UserPreferencesPatch {
        sidebar_collapsed: Some(true),
        ..Default::default()
    });

    let prefs = store.get();
    assert_that!(prefs.language, eq(Language::EnUs));
    assert_that!(prefs.sidebar_collapsed, eq(true));
}

#[test]
fn given_zero_page_size_when_update_then_accepted_as_is() {
    let store = PreferenceStore::detached();

    store.update(UserPreferencesPatch {
        page_size: Some(0),
        ..Default::default()
    });

    assert_that!(store.get().page_size, eq(0));
}

#[test]
fn given_empty_patch_when_update_then_state_unchanged() {
    let store = PreferenceStore::detached();
    store.update(UserPreferencesPatch {
        theme: Some(Theme::Auto),
        ..Default::default()
    });
    let before = store.get();

    store.update(UserPreferencesPatch::default());

    assert_eq!(store.get(), before);
}

#[test]
fn given_returned_copy_mutated_when_get_again_then_store_unaffected() {
    // Given
    let store = PreferenceStore::detached();
    let mut copy = store.get();

    // When
    copy.theme = Theme::Dark;
    copy.dashboard_layout.clear();
    copy.table_settings
        .insert("tickets".to_string(), TableSettings::default());

    // Then
    let fresh = store.get();
    assert_eq!(fresh, UserPreferences::default());
}

#[test]
fn given_table_settings_in_patch_when_update_then_map_replaced_wholesale() {
    // Given
    let store = PreferenceStore::detached();
    store.update_table_settings(
        "incidents",
        TableSettingsPatch {
            columns: Some(vec!["id".into()]),
            ..Default::default()
        },
    );
    let mut replacement = BTreeMap::new();
    replacement.insert(
        "tickets".to_string(),
        TableSettings {
            columns: vec!["title".into()],
            ..Default::default()
        },
    );

    // When
    store.update(UserPreferencesPatch {
        table_settings: Some(replacement),
        ..Default::default()
    });

    // Then
    let prefs = store.get();
    assert!(prefs.table("incidents").is_none());
    assert!(prefs.table("tickets").is_some());
}

// =========================================================================
// update_table_settings
// =========================================================================

#[test]
fn given_settings_for_another_table_when_update_table_settings_then_other_table_intact() {
    // Given
    let store = PreferenceStore::detached();
    store.update_table_settings(
        "incidents",
        TableSettingsPatch {
            columns: Some(vec!["id".into(), "priority".into()]),
            sort_field: Some("priority".into()),
            sort_direction: Some(SortDirection::Desc),
        },
    );
    let incidents_before = store.get().table("incidents").cloned();

    // When
    store.update_table_settings(
        "tickets",
        TableSettingsPatch {
            columns: Some(vec!["id".into(), "title".into()]),
            ..Default::default()
        },
    );

    // Then
    let prefs = store.get();
    assert_eq!(prefs.table("incidents").cloned(), incidents_before);
    assert_eq!(
        prefs.table("tickets").map(|t| t.columns.clone()),
        Some(vec!["id".to_string(), "title".to_string()])
    );
}

#[test]
fn given_existing_table_when_partial_table_patch_then_unpatched_table_fields_kept() {
    // Given
    let store = PreferenceStore::detached();
    store.update_table_settings(
        "tickets",
        TableSettingsPatch {
            columns: Some(vec!["id".into()]),
            sort_field: Some("created_at".into()),
            sort_direction: Some(SortDirection::Asc),
        },
    );

    // When
    store.update_table_settings(
        "tickets",
        TableSettingsPatch {
            sort_direction: Some(SortDirection::Desc),
            ..Default::default()
        },
    );

    // Then
    let tickets = store.get().table("tickets").cloned().unwrap();
    assert_eq!(tickets.columns, vec!["id".to_string()]);
    assert_that!(tickets.sort_field, some(eq("created_at")));
    assert_that!(tickets.sort_direction, some(eq(SortDirection::Desc)));
}

#[test]
fn given_unknown_table_when_update_table_settings_then_entry_created_from_empty() {
    let store = PreferenceStore::detached();

    store.update_table_settings(
        "changes",
        TableSettingsPatch {
            sort_field: Some("scheduled_at".into()),
            ..Default::default()
        },
    );

    let changes = store.get().table("changes").cloned().unwrap();
    assert!(changes.columns.is_empty());
    assert_that!(changes.sort_direction, none());
}

#[test]
fn given_table_update_when_get_then_other_preferences_untouched() {
    let store = PreferenceStore::detached();
    store.update(UserPreferencesPatch {
        theme: Some(Theme::Dark),
        ..Default::default()
    });

    store.update_table_settings("tickets", TableSettingsPatch::default());

    assert_that!(store.get().theme, eq(Theme::Dark));
}

// =========================================================================
// reset
// =========================================================================

#[test]
fn given_modified_store_when_reset_then_equals_defaults() {
    // Given
    let store = PreferenceStore::with_storage(MemoryStorage::new());
    store.update(UserPreferencesPatch {
        theme: Some(Theme::Dark),
        language: Some(Language::EnUs),
        page_size: Some(100),
        ..Default::default()
    });
    store.update_table_settings(
        "tickets",
        TableSettingsPatch {
            columns: Some(vec!["id".into()]),
            ..Default::default()
        },
    );

    // When
    store.reset();

    // Then
    assert_eq!(store.get(), UserPreferences::default());
}
