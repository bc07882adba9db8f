//! Voxel raycasting against the world store.
//!
//! `raycast` walks the grid cells pierced by a ray one boundary crossing at a
//! time (Amanatides & Woo), so it never skips a thin corner the way a fixed
//! step march can. The crossing that enters the hit cell tells us which face
//! was struck.
//!
//! # Example
//!
//! ```rust
//! use bevy::math::{IVec3, Vec3};
//! use voxland::block::BlockType;
//! use voxland::interaction::raycast;
//! use voxland::world::WorldStore;
//!
//! let mut world = WorldStore::new();
//! world.set_block(IVec3::new(1, 1, 0), BlockType::Stone);
//!
//! // From z = -1.5 looking towards +z.
//! let hit = raycast(&world, Vec3::new(1.5, 1.5, -1.5), Vec3::Z, 8.0).expect("should hit");
//! assert_eq!(hit.target, IVec3::new(1, 1, 0));
//! assert_eq!(hit.normal, IVec3::NEG_Z);
//! assert_eq!(hit.place_coordinate(), IVec3::new(1, 1, -1));
//! ```
use crate::world::{cell_of, Coordinate, WorldStore};
use bevy::math::{IVec3, Vec3};

/// Nearest block struck by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// Cell of the block that was hit.
    pub target: Coordinate,
    /// Outward normal of the struck face; exactly one component is +-1.
    pub normal: IVec3,
    /// Distance along the ray to the struck face.
    pub distance: f32,
}

impl RaycastHit {
    /// Empty cell adjacent to the struck face, where a new block would go.
    #[must_use]
    pub fn place_coordinate(&self) -> Coordinate {
        self.target + self.normal
    }
}

/// Cast a ray from `origin` along `direction` and return the first block hit
/// within `max_distance`.
///
/// The cell containing `origin` is the viewer's own cell and is never
/// reported as a hit.
///
/// # Return
/// * `Option<RaycastHit>` - `None` when nothing is hit in range, or when
///   `direction` is zero or the origin or range is not finite
#[must_use]
pub fn raycast(world: &WorldStore, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RaycastHit> {
    let d = direction.normalize_or_zero();
    if d == Vec3::ZERO || !origin.is_finite() || !max_distance.is_finite() {
        return None;
    }

    let mut cell = cell_of(origin);
    let step = IVec3::new(step_of(d.x), step_of(d.y), step_of(d.z));

    let mut t_max = Vec3::ZERO;
    let mut t_delta = Vec3::ZERO;
    for axis in 0..3 {
        if d[axis].abs() < 1e-6 {
            t_max[axis] = f32::INFINITY;
            t_delta[axis] = f32::INFINITY;
        } else {
            #[allow(clippy::cast_precision_loss)]
            let boundary = if step[axis] > 0 {
                cell[axis] as f32 + 1.0
            } else {
                cell[axis] as f32
            };
            t_max[axis] = ((boundary - origin[axis]) / d[axis]).max(0.0);
            t_delta[axis] = 1.0 / d[axis].abs();
        }
    }

    loop {
        let axis = if t_max.x < t_max.y {
            if t_max.x < t_max.z { 0 } else { 2 }
        } else if t_max.y < t_max.z {
            1
        } else {
            2
        };

        let t = t_max[axis];
        if t > max_distance {
            return None;
        }

        cell[axis] += step[axis];
        t_max[axis] += t_delta[axis];

        if world.contains(cell) {
            let mut normal = IVec3::ZERO;
            normal[axis] = -step[axis];
            return Some(RaycastHit {
                target: cell,
                normal,
                distance: t,
            });
        }
    }
}

fn step_of(v: f32) -> i32 {
    if v >= 0.0 { 1 } else { -1 }
}
