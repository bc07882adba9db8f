//! Handle player interactions with blocks (breaking/placing).
//!
//! Each tick the controller casts a ray from the viewer, reports the struck
//! block as the highlight target and, if an action input is held and the
//! shared cooldown has elapsed, removes the target or places the selected
//! block against the struck face.
//!
//! The controller itself is plain data driven by `tick`, so it can be
//! exercised without an `App`. The `block_interaction` system adapts it to
//! Bevy input, time and the player camera.
//!
//! # Examples
//!
//! ```rust
//! use bevy::math::{IVec3, Vec3};
//! use voxland::block::BlockType;
//! use voxland::interaction::{InteractionController, TickInput};
//! use voxland::world::WorldStore;
//!
//! let mut world = WorldStore::new();
//! world.set_block(IVec3::new(0, 0, 3), BlockType::Stone);
//! let mut controller = InteractionController::new(8.0, 0.25);
//!
//! let input = TickInput {
//!     origin: Vec3::new(0.5, 0.5, 0.5),
//!     forward: Vec3::Z,
//!     remove: true,
//!     place: false,
//!     now: 1.0,
//! };
//! let outcome = controller.tick(&mut world, BlockType::Grass, &input);
//! assert_eq!(outcome.highlight(), Some(IVec3::new(0, 0, 3)));
//! assert_eq!(world.get(IVec3::new(0, 0, 3)), None);
//! ```
pub mod raycast;

pub use raycast::{raycast, RaycastHit};

use crate::block::BlockType;
use crate::player::Player;
use crate::selection::Hotbar;
use crate::settings::{InteractionSettings, Settings};
use crate::world::{cell_of, Coordinate, WorldStore};
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

/// Minimum spacing between successive place/remove actions.
///
/// One timestamp is shared by both action kinds, so firing either one
/// starts the cooldown for the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionCooldown {
    last_action: Option<f64>,
    interval: f64,
}

impl ActionCooldown {
    #[must_use]
    pub fn new(interval: f32) -> Self {
        Self {
            last_action: None,
            interval: f64::from(interval),
        }
    }

    /// Whether an action may fire at time `now` (seconds).
    #[must_use]
    pub fn ready(&self, now: f64) -> bool {
        self.last_action.map_or(true, |last| now - last > self.interval)
    }

    pub fn trigger(&mut self, now: f64) {
        self.last_action = Some(now);
    }

    #[must_use]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn set_interval(&mut self, interval: f32) {
        self.interval = f64::from(interval);
    }
}

/// Per-tick input sampled from the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Viewer position; the ray starts here and its cell is the placement guard.
    pub origin: Vec3,
    pub forward: Vec3,
    /// Remove input is held.
    pub remove: bool,
    /// Place input is held.
    pub place: bool,
    /// Current time in seconds.
    pub now: f64,
}

/// A mutation attempt that passed the cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `removed` is `None` when the target was already empty.
    Remove {
        target: Coordinate,
        removed: Option<BlockType>,
    },
    /// `inserted` is `false` when the cell was already occupied.
    Place {
        target: Coordinate,
        block: BlockType,
        inserted: bool,
    },
}

/// Result of one controller tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutcome {
    pub hit: Option<RaycastHit>,
    pub action: Option<Action>,
}

impl TickOutcome {
    /// Coordinate the renderer should mark, if any.
    #[must_use]
    pub fn highlight(&self) -> Option<Coordinate> {
        self.hit.map(|h| h.target)
    }
}

/// Block interaction state: reach and the shared action cooldown.
#[derive(Resource, Debug, Clone, Copy)]
pub struct InteractionController {
    reach: f32,
    cooldown: ActionCooldown,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::from_settings(&InteractionSettings::default())
    }
}

impl InteractionController {
    #[must_use]
    pub fn new(reach: f32, cooldown_secs: f32) -> Self {
        Self {
            reach,
            cooldown: ActionCooldown::new(cooldown_secs),
        }
    }

    #[must_use]
    pub fn from_settings(settings: &InteractionSettings) -> Self {
        Self::new(settings.reach, settings.cooldown_secs)
    }

    /// Update reach and cooldown without resetting the last action time.
    pub fn apply_settings(&mut self, settings: &InteractionSettings) {
        self.reach = settings.reach;
        self.cooldown.set_interval(settings.cooldown_secs);
    }

    #[must_use]
    pub fn reach(&self) -> f32 {
        self.reach
    }

    #[must_use]
    pub fn cooldown(&self) -> &ActionCooldown {
        &self.cooldown
    }

    /// Run one interaction tick.
    ///
    /// # Arguments
    /// * `world` - store to query and mutate
    /// * `selected` - block type placed by the place action
    /// * `input` - viewer pose, held inputs and current time
    ///
    /// # Return
    /// * `TickOutcome` - the hit (if any) and the action that fired (if any).
    ///   At most one action fires per tick; remove is considered first.
    pub fn tick(&mut self, world: &mut WorldStore, selected: BlockType, input: &TickInput) -> TickOutcome {
        let Some(hit) = raycast(world, input.origin, input.forward, self.reach) else {
            return TickOutcome::default();
        };

        let mut outcome = TickOutcome {
            hit: Some(hit),
            action: None,
        };

        if input.remove && self.cooldown.ready(input.now) {
            let removed = world.remove_block(hit.target);
            self.cooldown.trigger(input.now);
            outcome.action = Some(Action::Remove {
                target: hit.target,
                removed,
            });
        }

        let place_at = hit.place_coordinate();
        if input.place && self.cooldown.ready(input.now) && place_at != cell_of(input.origin) {
            let inserted = world.set_block(place_at, selected);
            self.cooldown.trigger(input.now);
            outcome.action = Some(Action::Place {
                target: place_at,
                block: selected,
                inserted,
            });
        }

        outcome
    }
}

/// Block the renderer should mark this frame; replaced every tick.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HighlightTarget(pub Option<Coordinate>);

/// System parameters for `block_interaction`.
#[derive(bevy::ecs::system::SystemParam)]
pub struct BlockInteractionCtx<'w, 's> {
    pub mouse_button: Res<'w, ButtonInput<MouseButton>>,
    pub time: Res<'w, Time>,
    pub world: ResMut<'w, WorldStore>,
    pub hotbar: Res<'w, Hotbar>,
    pub controller: ResMut<'w, InteractionController>,
    pub highlight: ResMut<'w, HighlightTarget>,
    pub camera_query: Query<'w, 's, &'static Transform, With<Player>>,
    pub window_query: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
}

/// Sample the player camera and mouse buttons, then tick the controller.
///
/// Left mouse removes, right mouse places. Buttons are ignored while the
/// cursor is not grabbed so that the click which grabs it does not also
/// break a block.
pub fn block_interaction(mut ctx: BlockInteractionCtx) {
    let Ok(camera) = ctx.camera_query.get_single() else {
        ctx.highlight.0 = None;
        return;
    };

    let grabbed = ctx
        .window_query
        .get_single()
        .map_or(true, |w| w.cursor.grab_mode == CursorGrabMode::Locked);

    let input = TickInput {
        origin: camera.translation,
        forward: *camera.forward(),
        remove: grabbed && ctx.mouse_button.pressed(MouseButton::Left),
        place: grabbed && ctx.mouse_button.pressed(MouseButton::Right),
        now: ctx.time.elapsed_seconds_f64(),
    };

    let selected = ctx.hotbar.current();
    let outcome = ctx.controller.tick(&mut ctx.world, selected, &input);
    ctx.highlight.0 = outcome.highlight();

    match outcome.action {
        Some(Action::Remove { target, removed: Some(block) }) => {
            debug!("removed {block} at {target}");
        }
        Some(Action::Place { target, block, inserted: true }) => {
            debug!("placed {block} at {target}");
        }
        _ => {}
    }
}

/// Push changed interaction settings into the live controller.
#[allow(clippy::needless_pass_by_value)]
pub fn sync_interaction_settings(settings: Res<Settings>, mut controller: ResMut<InteractionController>) {
    if settings.is_changed() {
        controller.apply_settings(&settings.interaction);
    }
}
