//! # Rendering Collaborator Interfaces
//!
//! The sandbox core does not render anything itself. It drives an external
//! scene renderer through a narrow trait: visuals are created and destroyed
//! per grid cell as edits happen, and the camera pose is pushed once per
//! frame. The hotbar display is a second, independent collaborator that is
//! notified whenever the slot contents or selection change.
//!
//! The `HeadlessRenderer` in this module is the bundled implementation: it
//! tracks handles without producing pixels. The demo binary runs against it,
//! and the edit-operation tests use it to observe create/destroy traffic.

use cgmath::{Point3, Rad};

use super::hotbar::{HotbarSlot, SLOT_COUNT};
use super::voxels::block::block_type::BlockType;
use super::voxels::grid::GridCell;

mod headless;

pub use headless::HeadlessRenderer;

/// Opaque identifier for one block's visual representation.
///
/// Issued by the renderer on creation and handed back on destruction. The
/// grid stores one of these per solid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualHandle(pub u64);

/// The scene-rendering collaborator.
///
/// Implementations own whatever scene-graph or GPU state they need. The
/// engine calls these methods only from the frame-loop thread.
pub trait SceneRenderer {
    /// Creates the visual representation for a block at `cell`.
    ///
    /// # Returns
    /// The handle the engine must present when destroying the visual later.
    fn create_block_visual(&mut self, cell: GridCell, block_type: BlockType) -> VisualHandle;

    /// Destroys a previously created visual representation.
    fn destroy_block_visual(&mut self, handle: VisualHandle);

    /// Synchronizes the camera transform from the player state.
    ///
    /// Roll is fixed at zero; the pose is fully described by position, yaw
    /// and pitch.
    fn set_camera_pose(&mut self, position: Point3<f32>, yaw: Rad<f32>, pitch: Rad<f32>);

    /// Produces a frame from the current scene state.
    fn render(&mut self);
}

/// The hotbar-display collaborator.
pub trait HotbarView {
    /// Called after every hotbar mutation with the full slot array and the
    /// currently selected index.
    fn hotbar_changed(&mut self, slots: &[HotbarSlot; SLOT_COUNT], selected: usize);
}

/// A hotbar view that writes slot contents to the log instead of a screen.
pub struct LogHotbarView;

impl HotbarView for LogHotbarView {
    fn hotbar_changed(&mut self, slots: &[HotbarSlot; SLOT_COUNT], selected: usize) {
        log::debug!("hotbar changed: selected={} slots={:?}", selected, slots);
    }
}
