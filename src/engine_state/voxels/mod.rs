//! # Voxel World Core
//!
//! This module contains the voxel side of the sandbox: the block material
//! types, the dense fixed-size grid the player inhabits and edits, and the
//! ray picker that selects a block along the camera's view direction.
//!
//! ## Architecture
//!
//! * **Block**: material enumeration and the compact per-cell id
//! * **Grid**: bounds-checked dense storage of materials and visual handles
//! * **Raycast**: closest-hit picking against the solid cells
//!
//! The grid is mutated only by the edit operations in the engine state, and
//! only from the frame-loop thread. Nothing here performs I/O or blocks.

pub mod block;
pub mod grid;
pub mod raycast;
