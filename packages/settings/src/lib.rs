#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! App settings persisted through the key-value store seam.
//!
//! Settings load as the defaults until a record has been saved, so a
//! fresh install behaves sensibly without a first-run step.

use sakhi_contacts::CONTACTS_KEY;
use sakhi_forum::COMPLAINTS_KEY;
use sakhi_store::{KeyValueStore, StoreError, load_record, save_record};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store key the settings record persists under.
pub const SETTINGS_KEY: &str = "appSettings";

/// Default display language.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Errors returned by settings persistence.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The backing store failed while loading or saving.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// User-tunable app preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Push notifications on or off.
    pub notifications: bool,
    /// Share live location with trusted contacts.
    pub location_sharing: bool,
    /// Receive critical safety alerts.
    pub emergency_alerts: bool,
    /// Hide identity in forum posts.
    pub anonymous_mode: bool,
    /// Unlock with Face ID or fingerprint.
    pub biometric_login: bool,
    /// Display language.
    pub language: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            location_sharing: true,
            emergency_alerts: true,
            anonymous_mode: false,
            biometric_login: false,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Loads the saved settings, or the defaults when none are saved.
///
/// # Errors
///
/// Returns an error when the store fails or holds a malformed record.
pub async fn load(store: &dyn KeyValueStore) -> Result<AppSettings, SettingsError> {
    Ok(load_record(store, SETTINGS_KEY).await?.unwrap_or_default())
}

/// Saves the settings record.
///
/// # Errors
///
/// Returns an error when the store fails.
pub async fn save(store: &dyn KeyValueStore, settings: &AppSettings) -> Result<(), SettingsError> {
    Ok(save_record(store, SETTINGS_KEY, settings).await?)
}

/// Permanently removes every record this app persists: settings,
/// emergency contacts, and complaints.
///
/// # Errors
///
/// Returns an error when the store fails; earlier removals are not rolled
/// back.
pub async fn clear_all_data(store: &dyn KeyValueStore) -> Result<(), SettingsError> {
    for key in [SETTINGS_KEY, CONTACTS_KEY, COMPLAINTS_KEY] {
        store.remove(key).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sakhi_store::MemoryStore;

    #[test]
    fn defaults_favor_safety_features() {
        let settings = AppSettings::default();
        assert!(settings.notifications);
        assert!(settings.location_sharing);
        assert!(settings.emergency_alerts);
        assert!(!settings.anonymous_mode);
        assert!(!settings.biometric_login);
        assert_eq!(settings.language, "English");
    }

    #[tokio::test]
    async fn load_without_a_saved_record_yields_defaults() {
        let store = MemoryStore::new();
        let settings = load(&store).await.unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[tokio::test]
    async fn saved_settings_round_trip() {
        let store = MemoryStore::new();
        let settings = AppSettings {
            anonymous_mode: true,
            language: "Hindi".to_string(),
            ..AppSettings::default()
        };

        save(&store, &settings).await.unwrap();
        let reloaded = load(&store).await.unwrap();
        assert_eq!(reloaded, settings);
    }

    #[tokio::test]
    async fn clear_all_data_removes_every_persisted_key() {
        let store = MemoryStore::new();
        save(&store, &AppSettings::default()).await.unwrap();
        store.set(CONTACTS_KEY, "[]").await.unwrap();
        store.set(COMPLAINTS_KEY, "[]").await.unwrap();

        clear_all_data(&store).await.unwrap();

        for key in [SETTINGS_KEY, CONTACTS_KEY, COMPLAINTS_KEY] {
            assert!(store.get(key).await.unwrap().is_none(), "{key} survived");
        }
        assert_eq!(load(&store).await.unwrap(), AppSettings::default());
    }
}
