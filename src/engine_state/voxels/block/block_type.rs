//! # Block Type Module
//!
//! This module defines the different materials a block in the sandbox world
//! can be made of, along with conversions between the compact integer id
//! stored in the grid and the rich enum type.

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all block materials the sandbox world knows about.
///
/// The discriminant doubles as the block id stored in the grid: `AIR` is 0,
/// every solid material has a positive id. The `FromPrimitive` derive allows
/// conversion from the compact storage representation back to the enum.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An air block. Non-solid, never carries a visual representation.
    #[default]
    AIR,

    /// A grass block, the material the flat starting floor is made of.
    GRASS,

    /// A basic dirt block.
    DIRT,

    /// A stone block.
    STONE,

    /// A wooden block.
    WOOD,
}

impl BlockType {
    /// Converts a compact `BlockTypeSize` id back into a `BlockType`.
    ///
    /// Ids that do not correspond to a known material map to `None`, so a
    /// corrupted id never escapes as a bogus enum value.
    ///
    /// # Arguments
    /// * `btype` - The block id as a `BlockTypeSize`
    ///
    /// # Returns
    /// The corresponding `BlockType`, or `None` for unknown ids.
    pub fn from_id(btype: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(btype)
    }

    /// Returns this material's compact id.
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Returns `true` for the empty (air) material.
    pub fn is_air(self) -> bool {
        matches!(self, BlockType::AIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_through_from_id() {
        for block_type in [
            BlockType::AIR,
            BlockType::GRASS,
            BlockType::DIRT,
            BlockType::STONE,
            BlockType::WOOD,
        ] {
            assert_eq!(BlockType::from_id(block_type.id()), Some(block_type));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(BlockType::from_id(200), None);
    }

    #[test]
    fn only_air_is_air() {
        assert!(BlockType::AIR.is_air());
        assert!(!BlockType::STONE.is_air());
    }
}
