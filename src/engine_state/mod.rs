//! # Engine State Module
//!
//! The core state container for the sandbox: the block grid, the player, the
//! hotbar, and the two external collaborators (scene renderer and hotbar
//! view). The application's frame loop drives it with two calls per tick:
//! [`EngineState::set_input_commands`] to hand over the sampled input, then
//! [`EngineState::process_input`] to run slot selection, physics, camera
//! sync and any pending edit operations.
//!
//! ## Ownership
//!
//! All mutable state lives in this struct and is threaded through explicit
//! method calls from the single frame-loop thread. Nothing here is global,
//! shared, or locked.
//!
//! ## Error Discipline
//!
//! Every failure an edit can hit (no pick hit, out-of-bounds target, occupied
//! target, empty slot) is a silent no-op toward the player. Rejections are
//! logged at debug level for development visibility.

use web_time::Duration;

use crate::application_state::input_state::{GameButton, GameKey, ProcessedInputState};
use crate::application_state::settings::Settings;
use hotbar::Hotbar;
use player::PlayerState;
use rendering::{HotbarView, SceneRenderer};
use voxels::block::block_type::BlockType;
use voxels::grid::BlockGrid;
use voxels::raycast::{self, RaycastHit};

pub mod hotbar;
pub mod player;
pub mod rendering;
pub mod voxels;

/// Per-slot starter stack handed to the player at spawn.
const STARTER_STACK: u32 = 10;

/// The main state container for the sandbox core.
pub struct EngineState {
    /// The editable block grid.
    pub grid: BlockGrid,
    /// The player's position, orientation and velocity.
    pub player: PlayerState,
    /// The nine-slot inventory.
    pub hotbar: Hotbar,
    /// Input sampled for the upcoming tick.
    player_actions: PlayerAction,
    /// The scene-rendering collaborator.
    renderer: Box<dyn SceneRenderer>,
    /// The hotbar-display collaborator.
    hotbar_view: Box<dyn HotbarView>,
    /// Movement and world constants.
    settings: Settings,
}

impl EngineState {
    /// Creates the engine state: a flat grass floor with visuals attached,
    /// the player at the configured spawn, and a hotbar of starter stacks.
    ///
    /// # Arguments
    /// * `settings` - World and movement configuration
    /// * `renderer` - The scene-rendering collaborator
    /// * `hotbar_view` - The hotbar-display collaborator
    pub fn new(
        settings: Settings,
        renderer: Box<dyn SceneRenderer>,
        hotbar_view: Box<dyn HotbarView>,
    ) -> Self {
        let mut engine = EngineState {
            grid: BlockGrid::flat_floor(settings.world_size, BlockType::GRASS),
            player: PlayerState::new(settings.spawn_position()),
            hotbar: Hotbar::with_stacks(BlockType::GRASS, STARTER_STACK),
            player_actions: PlayerAction::default(),
            renderer,
            hotbar_view,
            settings,
        };

        // Attach a visual to every floor cell so the grid invariant holds
        // before the first tick.
        let floor: Vec<_> = engine.grid.solid_cells().collect();
        for (cell, block_type) in floor {
            let handle = engine.renderer.create_block_visual(cell, block_type);
            engine.grid.set_visual(cell, handle);
        }

        engine.notify_hotbar_view();
        engine
    }

    /// Stores the input commands for the next tick.
    ///
    /// # Arguments
    /// * `input` - The processed input snapshot for this frame
    /// * `look_enabled` - Whether pointer capture is active; look deltas and
    ///   edit clicks are ignored while it is not
    pub fn set_input_commands(&mut self, input: ProcessedInputState, look_enabled: bool) {
        self.player_actions = Self::translate_processed_input(input, look_enabled);
    }

    /// Runs one tick: slot selection, player physics, camera sync, and any
    /// pending break/place operation.
    ///
    /// # Arguments
    /// * `wait_duration` - Time elapsed since the previous tick
    pub fn process_input(&mut self, wait_duration: Duration) {
        if let Some(index) = self.player_actions.select_slot {
            if self.hotbar.select(index) {
                self.notify_hotbar_view();
            }
        }

        let actions = std::mem::take(&mut self.player_actions);
        self.player.update(&actions, wait_duration, &self.settings);

        self.renderer
            .set_camera_pose(self.player.position, self.player.yaw, self.player.pitch);

        if actions.break_block {
            if let Some(hit) = self.pick() {
                self.break_block(&hit);
            }
        }
        if actions.place_block {
            if let Some(hit) = self.pick() {
                self.place_block(&hit);
            }
        }
    }

    /// Produces a frame through the rendering collaborator.
    pub fn render(&mut self) {
        self.renderer.render();
    }

    /// Casts the pick ray from the camera along the view direction.
    fn pick(&self) -> Option<RaycastHit> {
        raycast::cast(
            &self.grid,
            self.player.position,
            self.player.look_direction(),
            self.settings.reach,
        )
    }

    /// Breaks the struck block: destroys its visual, empties the cell, and
    /// deposits the material into the selected hotbar slot.
    fn break_block(&mut self, hit: &RaycastHit) {
        if let Some(handle) = self.grid.take_visual(hit.cell) {
            self.renderer.destroy_block_visual(handle);
        }
        self.grid.set(hit.cell, BlockType::AIR);
        self.hotbar.deposit(hit.block_type);
        self.notify_hotbar_view();
    }

    /// Places a block from the selected slot into the cell adjacent to the
    /// struck face.
    ///
    /// Rejected silently when the target cell is outside the grid, already
    /// occupied, or the selected slot is empty.
    fn place_block(&mut self, hit: &RaycastHit) {
        let Some(target) = self.grid.neighbor(hit.cell, hit.normal) else {
            log::debug!("place rejected: target outside grid at {:?}", hit.cell);
            return;
        };
        match self.grid.get(target) {
            Some(block_type) if !block_type.is_air() => {
                log::debug!("place rejected: {:?} occupied", target);
                return;
            }
            None => return,
            Some(_) => {}
        }
        let Some(block_type) = self.hotbar.withdraw() else {
            log::debug!("place rejected: selected slot empty");
            return;
        };

        let handle = self.renderer.create_block_visual(target, block_type);
        self.grid.set(target, block_type);
        self.grid.set_visual(target, handle);
        self.notify_hotbar_view();
    }

    /// Pushes the current slot array and selection to the hotbar view.
    fn notify_hotbar_view(&mut self) {
        self.hotbar_view
            .hotbar_changed(self.hotbar.slots(), self.hotbar.selected_index());
    }

    /// Translates the processed input snapshot into player actions.
    fn translate_processed_input(input: ProcessedInputState, look_enabled: bool) -> PlayerAction {
        let mut actions = PlayerAction {
            move_forward: input.key_state(GameKey::Forward).is_active(),
            move_backward: input.key_state(GameKey::Backward).is_active(),
            move_left: input.key_state(GameKey::StrafeLeft).is_active(),
            move_right: input.key_state(GameKey::StrafeRight).is_active(),
            jump: input.key_state(GameKey::Jump).is_active(),
            ..PlayerAction::default()
        };

        if look_enabled {
            actions.rotate_view = input.pointer_delta();
            actions.break_block = input.button_state(GameButton::Primary).is_just_pressed();
            actions.place_block = input.button_state(GameButton::Secondary).is_just_pressed();
        }

        for (key, index) in GameKey::SLOT_KEYS.iter().zip(0..) {
            if input.key_state(*key).is_just_pressed() {
                actions.select_slot = Some(index);
            }
        }

        actions
    }
}

/// The player's sampled input for one tick.
///
/// Movement flags are level-triggered (held keys keep them set); the edit and
/// selection fields are edge-triggered from just-pressed transitions.
#[derive(Debug, Default)]
pub struct PlayerAction {
    /// Movement flags, true while the key is pressed or held.
    pub move_forward: bool,
    /// See `move_forward`.
    pub move_backward: bool,
    /// See `move_forward`.
    pub move_left: bool,
    /// See `move_forward`.
    pub move_right: bool,
    /// True while the jump key is held.
    pub jump: bool,

    /// Accumulated pointer deltas for this frame, present only while pointer
    /// capture is active.
    pub rotate_view: Option<(f64, f64)>,

    /// Break the picked block this tick.
    pub break_block: bool,
    /// Place a block against the picked face this tick.
    pub place_block: bool,
    /// Select this hotbar slot.
    pub select_slot: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::hotbar::HotbarSlot;
    use super::rendering::HeadlessRenderer;
    use super::voxels::grid::GridCell;
    use super::*;
    use cgmath::{Point3, Vector3};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every notification so tests can assert on the pushed state.
    struct RecordingView {
        log: Rc<RefCell<Vec<(Vec<HotbarSlot>, usize)>>>,
    }

    /// A renderer the test keeps a handle to after boxing it away.
    #[derive(Clone)]
    struct SharedRenderer(Rc<RefCell<HeadlessRenderer>>);

    impl SceneRenderer for SharedRenderer {
        fn create_block_visual(
            &mut self,
            cell: GridCell,
            block_type: BlockType,
        ) -> rendering::VisualHandle {
            self.0.borrow_mut().create_block_visual(cell, block_type)
        }

        fn destroy_block_visual(&mut self, handle: rendering::VisualHandle) {
            self.0.borrow_mut().destroy_block_visual(handle)
        }

        fn set_camera_pose(
            &mut self,
            position: Point3<f32>,
            yaw: cgmath::Rad<f32>,
            pitch: cgmath::Rad<f32>,
        ) {
            self.0.borrow_mut().set_camera_pose(position, yaw, pitch)
        }

        fn render(&mut self) {
            self.0.borrow_mut().render()
        }
    }

    impl HotbarView for RecordingView {
        fn hotbar_changed(&mut self, slots: &[HotbarSlot; hotbar::SLOT_COUNT], selected: usize) {
            self.log.borrow_mut().push((slots.to_vec(), selected));
        }
    }

    fn engine() -> (EngineState, Rc<RefCell<Vec<(Vec<HotbarSlot>, usize)>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let view = RecordingView { log: log.clone() };
        let engine = EngineState::new(
            Settings::default(),
            Box::new(HeadlessRenderer::new()),
            Box::new(view),
        );
        (engine, log)
    }

    fn floor_hit(engine: &EngineState, cell: GridCell) -> RaycastHit {
        RaycastHit {
            cell,
            block_type: engine.grid.get(cell).unwrap(),
            normal: Vector3::new(0, 1, 0),
            distance: 2.0,
        }
    }

    #[test]
    fn new_engine_attaches_a_visual_to_every_floor_cell() {
        let (engine, _) = engine();
        let size = engine.grid.size();
        for x in 0..size {
            for z in 0..size {
                assert!(engine.grid.has_visual(Point3::new(x, 0, z)));
            }
        }
    }

    #[test]
    fn break_empties_exactly_the_hit_cell() {
        let (mut engine, _) = engine();
        let cell = Point3::new(3, 0, 3);
        let hit = floor_hit(&engine, cell);

        engine.break_block(&hit);

        assert_eq!(engine.grid.get(cell), Some(BlockType::AIR));
        assert!(!engine.grid.has_visual(cell));

        let size = engine.grid.size();
        for x in 0..size {
            for z in 0..size {
                if (x, z) != (3, 3) {
                    assert_eq!(
                        engine.grid.get(Point3::new(x, 0, z)),
                        Some(BlockType::GRASS)
                    );
                }
            }
        }
    }

    #[test]
    fn break_deposits_into_the_selected_slot() {
        let (mut engine, _) = engine();
        engine.hotbar = Hotbar::new();

        engine.grid.set(Point3::new(2, 1, 2), BlockType::STONE);
        let stone_hit = RaycastHit {
            cell: Point3::new(2, 1, 2),
            block_type: BlockType::STONE,
            normal: Vector3::new(0, 1, 0),
            distance: 1.0,
        };
        engine.break_block(&stone_hit);

        assert_eq!(
            engine.hotbar.selected_slot(),
            HotbarSlot {
                block_type: BlockType::STONE,
                count: 1
            }
        );
    }

    #[test]
    fn place_fills_the_adjacent_cell_and_consumes_the_slot() {
        let (mut engine, _) = engine();
        engine.hotbar = Hotbar::new();
        engine.hotbar.deposit(BlockType::STONE);

        let hit = floor_hit(&engine, Point3::new(5, 0, 5));
        engine.place_block(&hit);

        let target = Point3::new(5, 1, 5);
        assert_eq!(engine.grid.get(target), Some(BlockType::STONE));
        assert!(engine.grid.has_visual(target));
        assert_eq!(engine.hotbar.selected_slot(), HotbarSlot::default());

        // The slot is now empty, so a second place is rejected.
        let second_hit = floor_hit(&engine, Point3::new(6, 0, 6));
        engine.place_block(&second_hit);
        assert_eq!(engine.grid.get(Point3::new(6, 1, 6)), Some(BlockType::AIR));
    }

    #[test]
    fn place_rejects_occupied_targets() {
        let (mut engine, _) = engine();
        engine.grid.set(Point3::new(5, 1, 5), BlockType::WOOD);

        let before = engine.hotbar.selected_slot();
        let hit = floor_hit(&engine, Point3::new(5, 0, 5));
        engine.place_block(&hit);

        assert_eq!(engine.grid.get(Point3::new(5, 1, 5)), Some(BlockType::WOOD));
        assert_eq!(engine.hotbar.selected_slot(), before);
    }

    #[test]
    fn place_rejects_targets_above_the_grid_top() {
        let (mut engine, _) = engine();
        let size = engine.grid.size();
        let top = size - 1;
        engine.grid.set(Point3::new(0, top, 0), BlockType::STONE);

        let before = engine.hotbar.selected_slot();
        let hit = RaycastHit {
            cell: Point3::new(0, top, 0),
            block_type: BlockType::STONE,
            normal: Vector3::new(0, 1, 0),
            distance: 1.0,
        };
        engine.place_block(&hit);

        assert_eq!(engine.hotbar.selected_slot(), before);
    }

    #[test]
    fn slot_selection_is_bounds_checked_and_notifies_the_view() {
        let (mut engine, log) = engine();
        log.borrow_mut().clear();

        engine.player_actions.select_slot = Some(4);
        engine.process_input(Duration::from_millis(16));
        assert_eq!(engine.hotbar.selected_index(), 4);
        assert_eq!(log.borrow().last().unwrap().1, 4);

        engine.player_actions.select_slot = Some(9);
        engine.process_input(Duration::from_millis(16));
        assert_eq!(engine.hotbar.selected_index(), 4);
    }

    #[test]
    fn tick_syncs_the_camera_pose_from_the_player() {
        let renderer = SharedRenderer(Rc::new(RefCell::new(HeadlessRenderer::new())));
        let log = Rc::new(RefCell::new(Vec::new()));
        let view = RecordingView { log };
        let mut engine = EngineState::new(
            Settings::default(),
            Box::new(renderer.clone()),
            Box::new(view),
        );

        engine.player.yaw = cgmath::Rad(1.25);
        engine.process_input(Duration::from_millis(16));

        let (position, yaw, pitch) = renderer.0.borrow().camera_pose().expect("pose synced");
        assert_eq!(position, engine.player.position);
        assert_eq!(yaw, engine.player.yaw);
        assert_eq!(pitch, engine.player.pitch);
    }

    #[test]
    fn break_click_flows_through_the_frame_path() {
        let (mut engine, _) = engine();
        engine.hotbar = Hotbar::new();

        // Aim the player straight down at the floor below the spawn.
        engine.player.pitch = cgmath::Rad(-std::f32::consts::FRAC_PI_2);

        engine.player_actions.break_block = true;
        engine.process_input(Duration::from_millis(1));

        let below = Point3::new(
            engine.player.position.x.round() as usize,
            0,
            engine.player.position.z.round() as usize,
        );
        assert_eq!(engine.grid.get(below), Some(BlockType::AIR));
        assert_eq!(engine.hotbar.selected_slot().block_type, BlockType::GRASS);
    }
}
