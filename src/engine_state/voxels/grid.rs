//! # Block Grid Module
//!
//! This module provides the `BlockGrid` struct, a dense fixed-size 3D array of
//! block materials covering the whole editable world. Alongside each cell's
//! material the grid tracks the optional visual-representation handle the
//! rendering collaborator issued for it.
//!
//! ## Bounds Discipline
//!
//! Grid coordinates and array indices are deliberately coupled, but every
//! accessor bounds-checks before indexing. Out-of-range coordinates surface as
//! `None` or a `false` return, never as a panic or a write to a neighboring
//! cell. Callers are expected to treat a rejected access as a silent no-op.

use cgmath::{Point3, Vector3};

use super::block::block_type::BlockType;
use crate::engine_state::rendering::VisualHandle;

/// Integer coordinates of a cell inside the grid.
pub type GridCell = Point3<usize>;

/// A dense `size × size × size` grid of block materials.
///
/// Cells are stored in row-major order (x, then y, then z). Each cell carries
/// its material plus an optional handle to the visual representation the
/// renderer created for it.
///
/// # Invariant
/// A cell holds a visual handle if and only if its material is non-air. The
/// edit operations maintain this; the grid itself only offers the primitives.
pub struct BlockGrid {
    /// Edge length of the cubic grid in cells.
    size: usize,
    /// Material of every cell, row-major.
    blocks: Vec<BlockType>,
    /// Visual handle of every cell, parallel to `blocks`.
    visuals: Vec<Option<VisualHandle>>,
}

impl BlockGrid {
    /// Creates a grid with a uniform single-layer floor at `y = 0` and all
    /// other cells empty.
    ///
    /// Only the materials are populated here. The caller is responsible for
    /// creating the floor's visual representations through the renderer and
    /// attaching the handles with [`BlockGrid::set_visual`].
    ///
    /// # Arguments
    /// * `size` - Edge length of the cubic grid in cells
    /// * `floor_material` - The material of the `y = 0` layer
    pub fn flat_floor(size: usize, floor_material: BlockType) -> Self {
        let cell_count = size * size * size;
        let mut grid = BlockGrid {
            size,
            blocks: vec![BlockType::AIR; cell_count],
            visuals: vec![None; cell_count],
        };

        for x in 0..size {
            for z in 0..size {
                grid.set(Point3::new(x, 0, z), floor_material);
            }
        }

        grid
    }

    /// Returns the edge length of the grid in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks whether a cell lies inside the grid bounds.
    pub fn in_bounds(&self, cell: GridCell) -> bool {
        cell.x < self.size && cell.y < self.size && cell.z < self.size
    }

    /// Returns the material at `cell`, or `None` when out of bounds.
    pub fn get(&self, cell: GridCell) -> Option<BlockType> {
        self.index(cell).map(|index| self.blocks[index])
    }

    /// Sets the material at `cell`.
    ///
    /// # Returns
    /// `true` if the cell was in bounds and updated, `false` otherwise.
    pub fn set(&mut self, cell: GridCell, block_type: BlockType) -> bool {
        match self.index(cell) {
            Some(index) => {
                self.blocks[index] = block_type;
                true
            }
            None => false,
        }
    }

    /// Checks whether the cell currently carries a visual handle.
    ///
    /// Out-of-bounds cells report `false`.
    pub fn has_visual(&self, cell: GridCell) -> bool {
        self.index(cell)
            .map(|index| self.visuals[index].is_some())
            .unwrap_or(false)
    }

    /// Attaches a visual handle to `cell`.
    ///
    /// # Returns
    /// `true` if the cell was in bounds and updated, `false` otherwise.
    pub fn set_visual(&mut self, cell: GridCell, handle: VisualHandle) -> bool {
        match self.index(cell) {
            Some(index) => {
                self.visuals[index] = Some(handle);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the visual handle at `cell`, if any.
    pub fn take_visual(&mut self, cell: GridCell) -> Option<VisualHandle> {
        self.index(cell).and_then(|index| self.visuals[index].take())
    }

    /// Computes the cell adjacent to `cell` along an axis-aligned face normal.
    ///
    /// # Arguments
    /// * `cell` - The starting cell
    /// * `normal` - The struck face's outward normal, components in {-1, 0, 1}
    ///
    /// # Returns
    /// The neighboring cell, or `None` when the offset leaves the grid on any
    /// axis (including underflow below zero).
    pub fn neighbor(&self, cell: GridCell, normal: Vector3<i32>) -> Option<GridCell> {
        let x = cell.x as i64 + normal.x as i64;
        let y = cell.y as i64 + normal.y as i64;
        let z = cell.z as i64 + normal.z as i64;

        if x < 0 || y < 0 || z < 0 {
            return None;
        }

        let neighbor = Point3::new(x as usize, y as usize, z as usize);
        self.in_bounds(neighbor).then_some(neighbor)
    }

    /// Iterates over all non-air cells together with their materials.
    ///
    /// This enumerates every cell of the grid, which is fine at the intended
    /// world scale.
    pub fn solid_cells(&self) -> impl Iterator<Item = (GridCell, BlockType)> + '_ {
        let size = self.size;
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, block_type)| !block_type.is_air())
            .map(move |(index, block_type)| {
                let x = index / (size * size);
                let y = (index / size) % size;
                let z = index % size;
                (Point3::new(x, y, z), *block_type)
            })
    }

    /// Translates a cell coordinate into a linear index, bounds-checked.
    fn index(&self, cell: GridCell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.x * self.size * self.size + cell.y * self.size + cell.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_value_for_every_cell() {
        let mut grid = BlockGrid::flat_floor(4, BlockType::GRASS);

        for x in 0..4 {
            for y in 0..4 {
                for z in 0..4 {
                    let cell = Point3::new(x, y, z);
                    assert!(grid.set(cell, BlockType::STONE));
                    assert_eq!(grid.get(cell), Some(BlockType::STONE));
                }
            }
        }
    }

    #[test]
    fn flat_floor_fills_only_the_bottom_layer() {
        let grid = BlockGrid::flat_floor(8, BlockType::GRASS);

        for x in 0..8 {
            for z in 0..8 {
                assert_eq!(grid.get(Point3::new(x, 0, z)), Some(BlockType::GRASS));
                assert_eq!(grid.get(Point3::new(x, 1, z)), Some(BlockType::AIR));
            }
        }
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut grid = BlockGrid::flat_floor(4, BlockType::GRASS);

        assert_eq!(grid.get(Point3::new(4, 0, 0)), None);
        assert!(!grid.set(Point3::new(0, 4, 0), BlockType::STONE));
        assert!(!grid.has_visual(Point3::new(0, 0, 4)));
        assert!(!grid.set_visual(Point3::new(9, 9, 9), VisualHandle(1)));
        assert_eq!(grid.take_visual(Point3::new(9, 9, 9)), None);
    }

    #[test]
    fn visual_handles_attach_and_detach() {
        let mut grid = BlockGrid::flat_floor(4, BlockType::GRASS);
        let cell = Point3::new(1, 0, 1);

        assert!(!grid.has_visual(cell));
        assert!(grid.set_visual(cell, VisualHandle(7)));
        assert!(grid.has_visual(cell));
        assert_eq!(grid.take_visual(cell), Some(VisualHandle(7)));
        assert!(!grid.has_visual(cell));
        assert_eq!(grid.take_visual(cell), None);
    }

    #[test]
    fn neighbor_rejects_offsets_leaving_the_grid() {
        let grid = BlockGrid::flat_floor(4, BlockType::GRASS);

        assert_eq!(
            grid.neighbor(Point3::new(0, 0, 0), Vector3::new(-1, 0, 0)),
            None
        );
        assert_eq!(
            grid.neighbor(Point3::new(3, 3, 3), Vector3::new(0, 1, 0)),
            None
        );
        assert_eq!(
            grid.neighbor(Point3::new(1, 0, 1), Vector3::new(0, 1, 0)),
            Some(Point3::new(1, 1, 1))
        );
    }

    #[test]
    fn solid_cells_enumerates_exactly_the_floor() {
        let grid = BlockGrid::flat_floor(4, BlockType::GRASS);
        let solids: Vec<_> = grid.solid_cells().collect();

        assert_eq!(solids.len(), 16);
        assert!(solids
            .iter()
            .all(|(cell, block_type)| cell.y == 0 && *block_type == BlockType::GRASS));
    }
}
