//! Settings, types and defaults.
//!
//! Settings are stored as a RON file under `data/settings/` and are hot-reloadable
//! using the RON watcher utilities (see `ron::setup_ron_watcher`). Only the
//! `interaction` and `controls` sections take effect live; `world` is read
//! once when the terrain is generated.
use bevy::prelude::{KeyCode, Resource};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod loader;

/// Startup world generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSettings {
    #[serde(default = "WorldSettings::default_seed")]
    pub seed: u64, // Seed for the terrain random stream
    #[serde(default = "WorldSettings::default_region_half_width")]
    pub region_half_width: i32, // Generated columns span -w..=w on x and z
    #[serde(default = "WorldSettings::default_max_height")]
    pub max_height: i32, // Column heights stay below this
}

impl WorldSettings {
    fn default_seed() -> u64 { 101 }
    fn default_region_half_width() -> i32 { 12 }
    fn default_max_height() -> i32 { 12 }
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            seed: Self::default_seed(),
            region_half_width: Self::default_region_half_width(),
            max_height: Self::default_max_height(),
        }
    }
}

/// Block interaction tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionSettings {
    #[serde(default = "InteractionSettings::default_reach")]
    pub reach: f32, // Maximum raycast distance in blocks
    #[serde(default = "InteractionSettings::default_cooldown_secs")]
    pub cooldown_secs: f32, // Minimum seconds between place/remove actions
}

impl InteractionSettings {
    fn default_reach() -> f32 { 8.0 }
    fn default_cooldown_secs() -> f32 { 0.25 }
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            reach: Self::default_reach(),
            cooldown_secs: Self::default_cooldown_secs(),
        }
    }
}

/// Controls / input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlsSettings {
    #[serde(default)]
    pub invert_y: bool, // Invert mouse Y axis
    #[serde(default)]
    pub invert_x: bool, // Invert mouse X axis
    #[serde(default = "ControlsSettings::default_sensitivity")]
    pub mouse_sensitivity: f32, // Mouse sensitivity multiplier
    #[serde(default = "ControlsSettings::default_fly_speed")]
    pub fly_speed: f32, // Viewer speed in blocks per second
    #[serde(default = "ControlsSettings::default_keybinds")]
    pub keybinds: HashMap<String, String>, // Map of action names to key identifiers (editable by user)
}

impl ControlsSettings {
    fn default_sensitivity() -> f32 { 20.0 }
    fn default_fly_speed() -> f32 { 6.0 }

    fn default_keybinds() -> HashMap<String, String> {
        [
            ("forward", "W"),
            ("back", "S"),
            ("left", "A"),
            ("right", "D"),
            ("up", "Space"),
            ("down", "LShift"),
            ("save", "F5"),
            ("pause", "Escape"),
        ]
        .into_iter()
        .map(|(action, key)| (action.to_string(), key.to_string()))
        .collect()
    }

    /// Key bound to `action`, or `default` when unbound or unparseable.
    #[must_use]
    pub fn key_for(&self, action: &str, default: KeyCode) -> KeyCode {
        self.keybinds
            .get(action)
            .and_then(|s| Settings::keycode_from_str(s))
            .unwrap_or(default)
    }
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            invert_y: false,
            invert_x: false,
            mouse_sensitivity: Self::default_sensitivity(),
            fly_speed: Self::default_fly_speed(),
            keybinds: Self::default_keybinds(),
        }
    }
}

/// Where the save key writes the world snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotSettings {
    #[serde(default = "SnapshotSettings::default_path")]
    pub path: String, // Snapshot file, overwritten on every save
}

impl SnapshotSettings {
    fn default_path() -> String { "world_snapshot.txt".to_string() }
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        Self { path: Self::default_path() }
    }
}

/// Top-level Settings
#[derive(Resource, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub world: WorldSettings,
    #[serde(default)]
    pub interaction: InteractionSettings,
    #[serde(default)]
    pub controls: ControlsSettings,
    #[serde(default)]
    pub snapshot: SnapshotSettings,
}

const LETTER_KEYS: [KeyCode; 26] = [
    KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD, KeyCode::KeyE,
    KeyCode::KeyF, KeyCode::KeyG, KeyCode::KeyH, KeyCode::KeyI, KeyCode::KeyJ,
    KeyCode::KeyK, KeyCode::KeyL, KeyCode::KeyM, KeyCode::KeyN, KeyCode::KeyO,
    KeyCode::KeyP, KeyCode::KeyQ, KeyCode::KeyR, KeyCode::KeyS, KeyCode::KeyT,
    KeyCode::KeyU, KeyCode::KeyV, KeyCode::KeyW, KeyCode::KeyX, KeyCode::KeyY,
    KeyCode::KeyZ,
];

const DIGIT_KEYS: [KeyCode; 10] = [
    KeyCode::Digit0, KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4,
    KeyCode::Digit5, KeyCode::Digit6, KeyCode::Digit7, KeyCode::Digit8, KeyCode::Digit9,
];

const FUNCTION_KEYS: [KeyCode; 12] = [
    KeyCode::F1, KeyCode::F2, KeyCode::F3, KeyCode::F4, KeyCode::F5, KeyCode::F6,
    KeyCode::F7, KeyCode::F8, KeyCode::F9, KeyCode::F10, KeyCode::F11, KeyCode::F12,
];

impl Settings {
    #[must_use]
    pub fn defaults() -> Self { Settings::default() }

    /// Convert a key identifier from `controls.keybinds` into a `KeyCode`.
    ///
    /// Accepts single letters and digits, `F1`..`F12`, and a handful of
    /// named keys (case-insensitive).
    ///
    /// # Returns
    /// `None` if the string does not name a supported key.
    #[must_use]
    pub fn keycode_from_str(name: &str) -> Option<KeyCode> {
        let s = name.trim().to_ascii_uppercase();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_uppercase() {
                return Some(LETTER_KEYS[(c as u8 - b'A') as usize]);
            }
            if c.is_ascii_digit() {
                return Some(DIGIT_KEYS[(c as u8 - b'0') as usize]);
            }
        }

        if let Some(n) = s.strip_prefix('F').and_then(|n| n.parse::<usize>().ok()) {
            return n.checked_sub(1).and_then(|i| FUNCTION_KEYS.get(i)).copied();
        }

        Some(match s.as_str() {
            "ESC" | "ESCAPE" => KeyCode::Escape,
            "SPACE" => KeyCode::Space,
            "TAB" => KeyCode::Tab,
            "ENTER" | "RETURN" => KeyCode::Enter,
            "LSHIFT" | "SHIFT" => KeyCode::ShiftLeft,
            "RSHIFT" => KeyCode::ShiftRight,
            "LCTRL" | "CTRL" | "CONTROL" => KeyCode::ControlLeft,
            "RCTRL" => KeyCode::ControlRight,
            "LALT" | "ALT" => KeyCode::AltLeft,
            "LEFT" | "ARROWLEFT" => KeyCode::ArrowLeft,
            "RIGHT" | "ARROWRIGHT" => KeyCode::ArrowRight,
            "UP" | "ARROWUP" => KeyCode::ArrowUp,
            "DOWN" | "ARROWDOWN" => KeyCode::ArrowDown,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letters_digits_and_named_keys() {
        assert_eq!(Settings::keycode_from_str("w"), Some(KeyCode::KeyW));
        assert_eq!(Settings::keycode_from_str("7"), Some(KeyCode::Digit7));
        assert_eq!(Settings::keycode_from_str("F5"), Some(KeyCode::F5));
        assert_eq!(Settings::keycode_from_str("f12"), Some(KeyCode::F12));
        assert_eq!(Settings::keycode_from_str("LShift"), Some(KeyCode::ShiftLeft));
        assert_eq!(Settings::keycode_from_str("Space"), Some(KeyCode::Space));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert_eq!(Settings::keycode_from_str("F0"), None);
        assert_eq!(Settings::keycode_from_str("F13"), None);
        assert_eq!(Settings::keycode_from_str("Hyper"), None);
        assert_eq!(Settings::keycode_from_str(""), None);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let settings: Settings = ron::from_str("(interaction: (cooldown_secs: 0.5))").unwrap();
        assert_eq!(settings.interaction.cooldown_secs, 0.5);
        assert_eq!(settings.interaction.reach, 8.0);
        assert_eq!(settings.world.seed, 101);
        assert_eq!(settings.snapshot.path, "world_snapshot.txt");
        assert_eq!(settings.controls.key_for("save", KeyCode::F1), KeyCode::F5);
    }

    #[test]
    fn unbound_action_falls_back() {
        let controls = ControlsSettings { keybinds: HashMap::new(), ..Default::default() };
        assert_eq!(controls.key_for("forward", KeyCode::KeyW), KeyCode::KeyW);
    }
}
