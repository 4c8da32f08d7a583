//! # Application State Management
//!
//! This module handles the application's lifecycle around the engine core:
//! - Window creation and the winit event loop
//! - Input event intake and per-frame snapshotting
//! - The pointer-capture state machine (locked/unlocked)
//! - Frame scheduling at the host's cadence
//!
//! ## Pointer Capture
//!
//! The loop has two states. **Unlocked**: look input and edit clicks are
//! ignored; a left click requests capture. **Locked**: the cursor is grabbed
//! and hidden, pointer deltas drive the view, and clicks break/place blocks.
//! Escape and focus loss are asynchronous interrupts that drop back to
//! Unlocked; they are handled in the event callbacks, never polled.

pub mod input_manager;
pub mod input_state;
pub mod settings;

use std::sync::Arc;

use log::info;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::engine_state::rendering::{HeadlessRenderer, LogHotbarView};
use crate::engine_state::EngineState;
use input_manager::InputManager;
use settings::Settings;

/// Whether pointer capture is currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Pointer capture active: look and edits are live.
    Locked,
    /// No capture: look input is ignored, a click requests capture.
    Unlocked,
}

/// The main application state container driving the frame loop.
pub struct ApplicationState {
    /// Configuration loaded at startup.
    pub settings: Settings,

    /// The initialized application state, once the window exists.
    pub state: Option<InitializedApplicationState>,
}

/// The running state of the application after window creation.
pub struct InitializedApplicationState {
    /// The sandbox core.
    pub engine_state: EngineState,

    /// Handle to the application window.
    pub window: Arc<Window>,

    /// Collects input events between ticks.
    pub input_manager: InputManager,

    /// Current pointer-capture state.
    pub capture: CaptureState,

    /// Timestamp of the previous tick for delta measurement.
    pub last_wait_time: web_time::Instant,
}

impl ApplicationState {
    /// Creates an application state that will initialize on `resumed`.
    pub fn new(settings: Settings) -> Self {
        ApplicationState {
            settings,
            state: None,
        }
    }
}

impl InitializedApplicationState {
    /// Attempts to acquire pointer capture.
    ///
    /// Falls back from `Locked` to `Confined` grabbing where the platform
    /// only supports one of the two. Failure leaves the state Unlocked.
    fn lock_pointer(&mut self) {
        let grabbed = self
            .window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));

        match grabbed {
            Ok(()) => {
                self.window.set_cursor_visible(false);
                self.capture = CaptureState::Locked;
                info!("Pointer capture acquired");
            }
            Err(error) => {
                log::warn!("Pointer capture unavailable: {}", error);
            }
        }
    }

    /// Releases pointer capture and clears any input collected while locked.
    fn unlock_pointer(&mut self) {
        let _ = self.window.set_cursor_grab(CursorGrabMode::None);
        self.window.set_cursor_visible(true);
        self.capture = CaptureState::Unlocked;
        self.input_manager.reset_inputs();
        info!("Pointer capture released");
    }
}

impl ApplicationHandler for ApplicationState {
    /// Creates the window and the engine core on first resume.
    ///
    /// # Arguments
    /// * `event_loop` - Reference to the active event loop
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window = Arc::new(
            event_loop
                .create_window(Window::default_attributes().with_title("voxel sandbox"))
                .expect("Window creation failed"),
        );

        let engine_state = EngineState::new(
            self.settings.clone(),
            Box::new(HeadlessRenderer::new()),
            Box::new(LogHotbarView),
        );

        self.state = Some(InitializedApplicationState {
            engine_state,
            window,
            input_manager: InputManager::new(),
            capture: CaptureState::Unlocked,
            last_wait_time: web_time::Instant::now(),
        });

        info!("Application initialized");
    }

    /// Handles window events: input intake, capture transitions, redraw and
    /// shutdown.
    ///
    /// # Arguments
    /// * `event_loop` - Reference to the active event loop
    /// * `_window_id` - ID of the window that generated the event
    /// * `event` - The window event to process
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            if matches!(event, WindowEvent::CloseRequested) {
                event_loop.exit();
            }
            return;
        };

        // An unlocked left click requests capture instead of editing.
        match &event {
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: ElementState::Pressed,
                ..
            } if state.capture == CaptureState::Unlocked => {
                state.lock_pointer();
                return;
            }
            _ => state.input_manager.intake_input(&event),
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                if state.capture == CaptureState::Locked {
                    state.unlock_pointer();
                }
            }
            WindowEvent::Focused(false) => {
                if state.capture == CaptureState::Locked {
                    state.unlock_pointer();
                } else {
                    state.input_manager.reset_inputs();
                }
            }
            WindowEvent::RedrawRequested => {
                state.engine_state.render();
            }
            WindowEvent::CloseRequested => event_loop.exit(),
            _ => (),
        }
    }

    /// Handles raw pointer motion, which only matters while captured.
    ///
    /// # Arguments
    /// * `_event_loop` - Reference to the active event loop
    /// * `_device_id` - ID of the device that generated the event
    /// * `event` - The device event to process
    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let Some(state) = &mut self.state {
            if let DeviceEvent::MouseMotion { delta } = event {
                if state.capture == CaptureState::Locked {
                    state.input_manager.intake_pointer_motion(delta);
                }
            }
        }
    }

    /// Runs one tick before the event loop sleeps: measure the delta, drain
    /// the input snapshot into the engine, advance the simulation, and
    /// schedule the next frame.
    ///
    /// # Arguments
    /// * `_event_loop` - Reference to the active event loop
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            let now = web_time::Instant::now();
            let wait_dt = now - state.last_wait_time;
            state.last_wait_time = now;

            let processed_input = state.input_manager.get_and_reset_processed_input();
            state
                .engine_state
                .set_input_commands(processed_input, state.capture == CaptureState::Locked);
            state.engine_state.process_input(wait_dt);

            state.window.request_redraw();
        }
    }
}
