//! Free-fly viewer movement.
//!
//! The viewer is not a physical body: it moves along its horizontal facing
//! and the world Y axis without collision. Blocks it passes through are
//! still protected from placement by the interaction guard.

use crate::player::Player;
use crate::settings::{ControlsSettings, Settings};
use bevy::prelude::*;

/// Unit direction requested by the held movement keys, or zero.
///
/// Forward/back and strafing follow the transform's facing projected onto
/// the XZ plane; up/down follow world Y.
#[must_use]
pub fn fly_direction(
    transform: &Transform,
    keys: &ButtonInput<KeyCode>,
    controls: &ControlsSettings,
) -> Vec3 {
    let forward_raw = transform.forward();
    let fwd = Vec3::new(forward_raw.x, 0.0, forward_raw.z).normalize_or_zero();
    let right_raw = transform.right();
    let right = Vec3::new(right_raw.x, 0.0, right_raw.z).normalize_or_zero();

    let bindings = [
        ("forward", KeyCode::KeyW, fwd),
        ("back", KeyCode::KeyS, -fwd),
        ("left", KeyCode::KeyA, -right),
        ("right", KeyCode::KeyD, right),
        ("up", KeyCode::Space, Vec3::Y),
        ("down", KeyCode::ShiftLeft, Vec3::NEG_Y),
    ];

    bindings
        .iter()
        .filter(|(action, default, _)| keys.pressed(controls.key_for(action, *default)))
        .map(|(_, _, dir)| *dir)
        .sum::<Vec3>()
        .normalize_or_zero()
}

/// Move the viewer each frame at `controls.fly_speed`.
#[allow(clippy::needless_pass_by_value)]
pub fn camera_movement(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    settings: Res<Settings>,
    mut query: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut transform) = query.get_single_mut() else { return };

    let dir = fly_direction(&transform, &keyboard_input, &settings.controls);
    transform.translation += dir * settings.controls.fly_speed * time.delta_seconds();
}
