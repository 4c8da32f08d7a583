//! # Headless Renderer
//!
//! A `SceneRenderer` implementation that tracks visuals without drawing.
//! It backs the demo binary and doubles as the observable test double for
//! the edit operations.

use std::collections::HashMap;

use cgmath::{Point3, Rad};

use super::{SceneRenderer, VisualHandle};
use crate::engine_state::voxels::block::block_type::BlockType;
use crate::engine_state::voxels::grid::GridCell;

/// Tracks live visuals and the last camera pose it was handed.
pub struct HeadlessRenderer {
    /// Next handle value to issue. Handles are never reused.
    next_handle: u64,
    /// All currently live visuals, keyed by handle.
    live: HashMap<VisualHandle, (GridCell, BlockType)>,
    /// The camera pose from the most recent sync, if any.
    camera_pose: Option<(Point3<f32>, Rad<f32>, Rad<f32>)>,
    /// Number of frames "rendered" so far.
    frames: u64,
}

impl HeadlessRenderer {
    /// Creates a renderer with no live visuals.
    pub fn new() -> Self {
        HeadlessRenderer {
            next_handle: 0,
            live: HashMap::new(),
            camera_pose: None,
            frames: 0,
        }
    }

    /// Returns how many visuals are currently live.
    pub fn visual_count(&self) -> usize {
        self.live.len()
    }

    /// Looks up the cell and material a live handle was created for.
    pub fn visual(&self, handle: VisualHandle) -> Option<(GridCell, BlockType)> {
        self.live.get(&handle).copied()
    }

    /// Returns the camera pose from the most recent sync.
    pub fn camera_pose(&self) -> Option<(Point3<f32>, Rad<f32>, Rad<f32>)> {
        self.camera_pose
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRenderer for HeadlessRenderer {
    fn create_block_visual(&mut self, cell: GridCell, block_type: BlockType) -> VisualHandle {
        let handle = VisualHandle(self.next_handle);
        self.next_handle += 1;
        self.live.insert(handle, (cell, block_type));
        log::trace!("visual created: {:?} at {:?} ({:?})", handle, cell, block_type);
        handle
    }

    fn destroy_block_visual(&mut self, handle: VisualHandle) {
        if self.live.remove(&handle).is_none() {
            log::debug!("destroy of unknown visual {:?} ignored", handle);
        }
    }

    fn set_camera_pose(&mut self, position: Point3<f32>, yaw: Rad<f32>, pitch: Rad<f32>) {
        self.camera_pose = Some((position, yaw, pitch));
    }

    fn render(&mut self) {
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique_and_destroyable() {
        let mut renderer = HeadlessRenderer::new();

        let a = renderer.create_block_visual(Point3::new(0, 0, 0), BlockType::GRASS);
        let b = renderer.create_block_visual(Point3::new(1, 0, 0), BlockType::STONE);
        assert_ne!(a, b);
        assert_eq!(renderer.visual_count(), 2);

        renderer.destroy_block_visual(a);
        assert_eq!(renderer.visual_count(), 1);
        assert_eq!(renderer.visual(a), None);
        assert_eq!(
            renderer.visual(b),
            Some((Point3::new(1, 0, 0), BlockType::STONE))
        );
    }

    #[test]
    fn destroying_unknown_handle_is_a_no_op() {
        let mut renderer = HeadlessRenderer::new();
        renderer.destroy_block_visual(VisualHandle(42));
        assert_eq!(renderer.visual_count(), 0);
    }
}
