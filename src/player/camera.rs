//! Mouse look and cursor grabbing.
//!
//! `camera_look` accumulates mouse motion for the current update and applies
//! yaw/pitch to the viewer's transform while the cursor is hidden.
//! `cursor_grab` locks the cursor on left click and releases it on the
//! pause key.

use bevy::input::mouse::MouseMotion;
use bevy::math::EulerRot;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use crate::player::Player;
use crate::settings::{ControlsSettings, Settings};

const CAMERA_MAX_PITCH_DEG: f32 = 85.0;

/// Stores the viewer's look orientation (yaw and pitch) in radians.
///
/// - `yaw`: horizontal rotation around the Y axis.
/// - `pitch`: vertical rotation around the X axis, clamped short of straight up/down.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PlayerLook {
    pub yaw: f32,
    pub pitch: f32,
}

impl PlayerLook {
    /// Apply a raw mouse delta, honouring sensitivity and axis inversion.
    pub fn apply_delta(&mut self, delta: Vec2, controls: &ControlsSettings) {
        let max_pitch = CAMERA_MAX_PITCH_DEG.to_radians();
        let scale = controls.mouse_sensitivity / 10000.0;
        let dx = if controls.invert_x { -delta.x } else { delta.x };
        let dy = if controls.invert_y { -delta.y } else { delta.y };

        self.yaw -= dx * scale;
        self.pitch = (self.pitch - dy * scale).clamp(-max_pitch, max_pitch);
    }

    /// Rotation for this yaw/pitch pair.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

/// Apply mouse-look to entities with a `PlayerLook` component.
#[allow(clippy::needless_pass_by_value)]
pub fn camera_look(
    windows: Query<&Window, With<PrimaryWindow>>,
    motion_events: Res<Events<MouseMotion>>,
    mut query: Query<(&mut Transform, &mut PlayerLook), With<Player>>,
    settings: Res<Settings>,
) {
    let delta: Vec2 = motion_events.iter_current_update_events().map(|ev| ev.delta).sum();
    if delta == Vec2::ZERO {
        return;
    }

    let Ok(window) = windows.get_single() else { return };
    if window.cursor.visible {
        return;
    }

    for (mut transform, mut look) in &mut query {
        look.apply_delta(delta, &settings.controls);
        transform.rotation = look.rotation();
    }
}

/// Toggle cursor grab and visibility.
#[allow(clippy::needless_pass_by_value)]
pub fn cursor_grab(
    mut wq: Query<&mut Window, With<PrimaryWindow>>,
    mb: Res<ButtonInput<MouseButton>>,
    kb: Res<ButtonInput<KeyCode>>,
    settings: Res<Settings>,
) {
    let Ok(mut w) = wq.get_single_mut() else { return };

    if mb.just_pressed(MouseButton::Left) {
        w.cursor.grab_mode = CursorGrabMode::Locked;
        w.cursor.visible = false;
    }

    if kb.just_pressed(settings.controls.key_for("pause", KeyCode::Escape)) {
        w.cursor.grab_mode = CursorGrabMode::None;
        w.cursor.visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_is_clamped() {
        let controls = ControlsSettings::default();
        let mut look = PlayerLook::default();
        look.apply_delta(Vec2::new(0.0, -1.0e6), &controls);
        assert!((look.pitch - CAMERA_MAX_PITCH_DEG.to_radians()).abs() < 1e-5);
        look.apply_delta(Vec2::new(0.0, 1.0e6), &controls);
        assert!((look.pitch + CAMERA_MAX_PITCH_DEG.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn inversion_flips_direction() {
        let mut controls = ControlsSettings::default();
        let mut plain = PlayerLook::default();
        plain.apply_delta(Vec2::new(10.0, 10.0), &controls);

        controls.invert_x = true;
        controls.invert_y = true;
        let mut inverted = PlayerLook::default();
        inverted.apply_delta(Vec2::new(10.0, 10.0), &controls);

        assert!((plain.yaw + inverted.yaw).abs() < 1e-6);
        assert!((plain.pitch + inverted.pitch).abs() < 1e-6);
        assert!(plain.yaw < 0.0);
    }

    #[test]
    fn zero_look_faces_negative_z() {
        let forward = PlayerLook::default().rotation() * Vec3::NEG_Z;
        assert!(forward.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }
}
