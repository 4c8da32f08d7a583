//! # Block Module
//!
//! This module provides the block-related types used by the sandbox world:
//! the material enumeration and the compact storage representation the grid
//! keeps per cell.

pub mod block_type;

/// The underlying integer type used to represent block materials in memory.
/// The grid stores one of these per cell; id 0 is always air.
pub type BlockTypeSize = u8;
