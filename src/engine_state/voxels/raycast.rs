//! # Ray Picker Module
//!
//! This module determines which block the player is looking at. A ray is cast
//! from the camera position along its forward direction and intersected with
//! the unit cubes of every solid cell; the nearest intersection inside the
//! pick range wins.
//!
//! Enumerating every solid cell as a candidate is the right trade-off at this
//! world scale. A cell-by-cell ray walk would scale better and is the obvious
//! upgrade path for larger grids.

use cgmath::{InnerSpace, Point3, Vector3};

use super::block::block_type::BlockType;
use super::grid::{BlockGrid, GridCell};

/// Half the edge length of a block cube. Blocks are centered on their integer
/// grid coordinates, so each occupies `[c - 0.5, c + 0.5]` on every axis.
const BLOCK_HALF_EXTENT: f32 = 0.5;

/// Direction components smaller than this are treated as parallel to the
/// corresponding slab.
const PARALLEL_EPSILON: f32 = 1e-6;

/// The result of a successful pick: which cell was struck, through which
/// face, and how far along the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// Grid coordinates of the struck block.
    pub cell: GridCell,
    /// Material of the struck block.
    pub block_type: BlockType,
    /// Outward normal of the struck face, components in {-1, 0, 1}.
    pub normal: Vector3<i32>,
    /// Distance from the ray origin to the entry point.
    pub distance: f32,
}

/// Casts a ray through the grid and returns the nearest struck block.
///
/// # Arguments
/// * `grid` - The block grid to pick against
/// * `origin` - Ray origin (the camera position)
/// * `direction` - Ray direction; normalized internally
/// * `max_range` - Maximum pick distance along the ray
///
/// # Returns
/// The closest hit within range, or `None` when the ray strikes nothing.
/// A degenerate (zero-length) direction also reports `None`.
pub fn cast(
    grid: &BlockGrid,
    origin: Point3<f32>,
    direction: Vector3<f32>,
    max_range: f32,
) -> Option<RaycastHit> {
    if direction.magnitude2() < PARALLEL_EPSILON {
        return None;
    }
    let direction = direction.normalize();

    let mut nearest: Option<RaycastHit> = None;
    for (cell, block_type) in grid.solid_cells() {
        if let Some((distance, normal)) = intersect_block(cell, origin, direction) {
            if distance > max_range {
                continue;
            }
            if nearest.map_or(true, |hit| distance < hit.distance) {
                nearest = Some(RaycastHit {
                    cell,
                    block_type,
                    normal,
                    distance,
                });
            }
        }
    }

    nearest
}

/// Intersects the ray with a single block's cube using the slab method.
///
/// Returns the entry distance and the normal of the entered face, or `None`
/// when the ray misses the cube or starts inside/behind it.
fn intersect_block(
    cell: GridCell,
    origin: Point3<f32>,
    direction: Vector3<f32>,
) -> Option<(f32, Vector3<i32>)> {
    let center = Point3::new(cell.x as f32, cell.y as f32, cell.z as f32);

    let mut t_entry = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut entry_axis = 0;
    let mut entry_sign = 0;

    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];
        let min = center[axis] - BLOCK_HALF_EXTENT;
        let max = center[axis] + BLOCK_HALF_EXTENT;

        if d.abs() < PARALLEL_EPSILON {
            // Parallel to the slab: either always inside it or never.
            if o < min || o > max {
                return None;
            }
            continue;
        }

        let mut t_near = (min - o) / d;
        let mut t_far = (max - o) / d;
        if t_near > t_far {
            std::mem::swap(&mut t_near, &mut t_far);
        }

        if t_near > t_entry {
            t_entry = t_near;
            entry_axis = axis;
            entry_sign = if d > 0.0 { -1 } else { 1 };
        }
        t_exit = t_exit.min(t_far);

        if t_entry > t_exit {
            return None;
        }
    }

    // Entry behind or at the origin means the camera sits inside the cube;
    // such a block is not pickable.
    if t_entry <= 0.0 {
        return None;
    }

    let mut normal = Vector3::new(0, 0, 0);
    normal[entry_axis] = entry_sign;
    Some((t_entry, normal))
}
