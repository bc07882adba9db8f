//! This module contains the block catalog: the closed set of block types
//! the world can hold, and their display properties.
//!
//! The order of `BlockType::ALL` is significant. It defines hotbar indexing
//! and the direction of scroll cycling, and the snapshot format refers to
//! blocks by their catalog `name()`.
//!
//! Example:
//!
//! ```rust
//! use voxland::block::BlockType;
//!
//! let sand: BlockType = "sand".parse().unwrap();
//! assert_eq!(sand, BlockType::Sand);
//! assert_eq!(sand.name(), "sand");
//! assert!("lava".parse::<BlockType>().is_err());
//! ```

pub mod catalog;

pub use catalog::BlockProperties;

use crate::error::UnknownBlockType;
use std::fmt;
use std::str::FromStr;

/// A block type from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockType {
    Grass,
    Dirt,
    Stone,
    Sand,
    Wood,
    Leaves,
}

impl BlockType {
    /// Every block type in catalog order.
    pub const ALL: [BlockType; 6] = [
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Sand,
        BlockType::Wood,
        BlockType::Leaves,
    ];

    /// Number of entries in the catalog.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this type in catalog order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a block type by catalog position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<BlockType> {
        Self::ALL.get(index).copied()
    }

    /// Catalog name used in snapshots and logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.properties().name
    }

    /// Static display properties for this block type.
    #[must_use]
    pub fn properties(self) -> &'static BlockProperties {
        &catalog::PROPERTIES[self as usize]
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_parse() {
        for block in BlockType::ALL {
            assert_eq!(block.name().parse::<BlockType>(), Ok(block));
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "obsidian".parse::<BlockType>().unwrap_err();
        assert_eq!(err, UnknownBlockType("obsidian".to_string()));
    }

    #[test]
    fn catalog_order_matches_index() {
        for (i, block) in BlockType::ALL.iter().enumerate() {
            assert_eq!(block.index(), i);
            assert_eq!(BlockType::from_index(i), Some(*block));
        }
        assert_eq!(BlockType::from_index(BlockType::COUNT), None);
    }
}
