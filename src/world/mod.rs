//! World storage and block access helpers.
//!
//! This module provides the `WorldStore` resource, a sparse map from integer
//! grid coordinates to block types. It is the single source of truth for the
//! world's contents: terrain generation fills it once at startup, and block
//! interaction mutates it afterwards.
//!
//! Successful mutations queue a `BlockChange` notification. The
//! `forward_block_changes` system drains that queue into `BlockChanged`
//! events each frame so the renderer can create or destroy visuals without
//! ever being consulted for world logic.
//!
//! # Example:
//!
//! ```
//! use bevy::math::IVec3;
//! use voxland::block::BlockType;
//! use voxland::world::WorldStore;
//!
//! let mut world = WorldStore::new();
//! assert!(world.set_block(IVec3::new(0, 1, 0), BlockType::Stone));
//! // Occupied cells are never overwritten.
//! assert!(!world.set_block(IVec3::new(0, 1, 0), BlockType::Dirt));
//! assert_eq!(world.get(IVec3::new(0, 1, 0)), Some(BlockType::Stone));
//! ```

use crate::block::BlockType;
use bevy::prelude::*;
use std::collections::HashMap;

/// Integer grid key. A block at `c` fills the unit cube `[c, c + 1)`.
pub type Coordinate = IVec3;

/// Grid cell containing a world-space point.
#[must_use]
pub fn cell_of(point: Vec3) -> Coordinate {
    point.floor().as_ivec3()
}

/// Notification queued by a successful store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockChange {
    Added(Coordinate, BlockType),
    Removed(Coordinate),
}

/// Event form of `BlockChange`, consumed by the render collaborator.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockChanged(pub BlockChange);

/// Sparse block storage keyed by grid coordinate.
///
/// # Fields
/// * `blocks` - occupied cells and their block types
/// * `changes` - notifications not yet forwarded to the renderer
#[derive(Resource, Default, Debug)]
pub struct WorldStore {
    blocks: HashMap<Coordinate, BlockType>,
    changes: Vec<BlockChange>,
}

impl WorldStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `block` at `coord` if the cell is free.
    ///
    /// # Return
    /// * `bool` - `true` iff an insertion happened. An occupied cell keeps its
    ///   original type and nothing is queued.
    pub fn set_block(&mut self, coord: Coordinate, block: BlockType) -> bool {
        if self.blocks.contains_key(&coord) {
            return false;
        }
        self.blocks.insert(coord, block);
        self.changes.push(BlockChange::Added(coord, block));
        true
    }

    /// Remove the block at `coord`.
    ///
    /// # Return
    /// * `Option<BlockType>` - the removed type, or `None` if the cell was empty
    pub fn remove_block(&mut self, coord: Coordinate) -> Option<BlockType> {
        let removed = self.blocks.remove(&coord)?;
        self.changes.push(BlockChange::Removed(coord));
        Some(removed)
    }

    #[must_use]
    pub fn get(&self, coord: Coordinate) -> Option<BlockType> {
        self.blocks.get(&coord).copied()
    }

    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.blocks.contains_key(&coord)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Traverse every block in ascending `(x, y, z)` order.
    ///
    /// The order is independent of hash state so snapshots of equal worlds
    /// are byte-identical. Each call restarts the traversal.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, BlockType)> + '_ {
        let mut keys: Vec<Coordinate> = self.blocks.keys().copied().collect();
        keys.sort_unstable_by_key(|c| (c.x, c.y, c.z));
        keys.into_iter().map(move |c| (c, self.blocks[&c]))
    }

    /// Take all queued notifications, oldest first.
    pub fn drain_changes(&mut self) -> std::vec::Drain<'_, BlockChange> {
        self.changes.drain(..)
    }

    #[must_use]
    pub fn pending_changes(&self) -> usize {
        self.changes.len()
    }
}

/// Forward queued store notifications as `BlockChanged` events.
pub fn forward_block_changes(
    mut world: ResMut<WorldStore>,
    mut events: EventWriter<BlockChanged>,
) {
    if world.pending_changes() == 0 {
        return;
    }
    events.send_batch(world.drain_changes().map(BlockChanged));
}
