//! Viewer components and systems (mouse look, free-fly movement).
//!
//! The viewer is a camera entity carrying `Player` and `PlayerLook`. Its
//! translation is the ray origin for block interaction and its forward
//! vector is the ray direction.
//!
//! # Example:
//!
//! ```ignore
//! commands.spawn((
//!     Camera3dBundle::default(),
//!     Player,
//!     PlayerLook::default(),
//! ));
//! app.add_systems(Update, (camera_look, camera_movement, cursor_grab));
//! ```
pub mod camera;
pub mod movement;

use bevy::prelude::*;

pub use camera::*;
pub use movement::*;

/// Marks the viewer entity.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Player;
