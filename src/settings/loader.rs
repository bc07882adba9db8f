//! Settings loading and hot-reloading.
//!
//! Settings are loaded from RON files in the `data/settings` directory. If multiple
//! RON files are present, the first successfully parsed `Settings` (in file name
//! order) is used. If no RON files are found or none parse, default settings are used.
use crate::ron::{load_ron_files, setup_ron_watcher, RonWatcher};
use crate::settings::Settings;
use bevy::log::info;
use bevy::prelude::{Res, ResMut, Resource};

/// Directory scanned for settings files.
pub const SETTINGS_DIR: &str = "data/settings";

#[derive(Resource)]
pub struct SettingsWatcher {
    pub watcher: RonWatcher,
    pub dir: String,
}

impl SettingsWatcher {
    #[must_use]
    pub fn stub() -> Self {
        SettingsWatcher {
            watcher: RonWatcher::stub(),
            dir: SETTINGS_DIR.to_string(),
        }
    }
}

/// Load settings from `path` (directory), falling back to defaults.
///
/// # Example
/// ```
/// let settings = voxland::settings::loader::load_settings_from_dir("data/settings");
/// assert!(settings.interaction.reach > 0.0);
/// ```
#[must_use]
pub fn load_settings_from_dir(path: &str) -> Settings {
    let items: Vec<Settings> = load_ron_files(path);
    items.into_iter().next().unwrap_or_else(Settings::defaults)
}

/// Create a watcher for the settings directory (hot-reload).
///
/// # Errors
/// Returns the `notify::Error` from watcher setup; callers fall back to
/// `SettingsWatcher::stub()`.
pub fn setup_settings_watcher(path: &str) -> Result<SettingsWatcher, notify::Error> {
    setup_ron_watcher(path).map(|watcher| SettingsWatcher {
        watcher,
        dir: path.to_string(),
    })
}

/// Reload the `Settings` resource when the watched files change.
#[allow(clippy::needless_pass_by_value)]
pub fn check_settings_changes(watcher: Res<SettingsWatcher>, mut settings: ResMut<Settings>) {
    if watcher.watcher.take_changed() {
        *settings = load_settings_from_dir(&watcher.dir);
        info!("settings reloaded from {}", watcher.dir);
    }
}
