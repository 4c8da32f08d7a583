//! # Input Manager
//!
//! This module collects asynchronous input events between frame ticks and
//! hands the frame loop a processed snapshot once per tick:
//! - Keyboard state tracked in fixed previous/current boolean tables
//! - Mouse button state tracked the same way
//! - Pointer motion deltas accumulated until drained
//!
//! Event handlers only flip booleans or add to the delta accumulator; nothing
//! here blocks or suspends.

use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::input_state::{GameButton, GameKey, KeyState, ProcessedInputState};

/// Tracks the raw state of all recognized inputs between frame ticks.
pub struct InputManager {
    /// Key state as of the previous snapshot.
    keys_old: [bool; GameKey::COUNT],
    /// Key state as mutated by events since then.
    keys_new: [bool; GameKey::COUNT],

    /// Button state as of the previous snapshot.
    buttons_old: [bool; GameButton::COUNT],
    /// Button state as mutated by events since then.
    buttons_new: [bool; GameButton::COUNT],

    /// Pointer motion accumulated since the previous snapshot.
    pointer_delta: Option<(f64, f64)>,
}

impl InputManager {
    /// Creates an input manager with everything released.
    pub fn new() -> Self {
        InputManager {
            keys_old: [false; GameKey::COUNT],
            keys_new: [false; GameKey::COUNT],
            buttons_old: [false; GameButton::COUNT],
            buttons_new: [false; GameButton::COUNT],
            pointer_delta: None,
        }
    }

    /// Processes a window event and updates the raw tables.
    ///
    /// Keys and buttons outside the recognized set are ignored.
    ///
    /// # Arguments
    /// * `event` - The window event to process
    pub fn intake_input(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => {
                if let Some(key) = GameKey::from_key_code(*code) {
                    self.keys_new[key.index()] = *state == ElementState::Pressed;
                }
            }
            WindowEvent::MouseInput { button, state, .. } => {
                if let Some(button) = GameButton::from_mouse_button(*button) {
                    self.buttons_new[button.index()] = *state == ElementState::Pressed;
                }
            }
            _ => {}
        }
    }

    /// Accumulates a pointer motion delta.
    ///
    /// Deltas arrive per device event and are summed until the next snapshot
    /// drains them.
    ///
    /// # Arguments
    /// * `delta` - The (x, y) pointer movement reported by the host
    pub fn intake_pointer_motion(&mut self, delta: (f64, f64)) {
        let (acc_x, acc_y) = self.pointer_delta.unwrap_or((0.0, 0.0));
        self.pointer_delta = Some((acc_x + delta.0, acc_y + delta.1));
    }

    /// Produces the processed snapshot for this frame and advances the
    /// previous-state tables.
    ///
    /// # Returns
    /// The processed input state with transition states derived from the
    /// previous and current raw tables.
    pub fn get_and_reset_processed_input(&mut self) -> ProcessedInputState {
        let mut key_states = [KeyState::NotPressed; GameKey::COUNT];
        for index in 0..GameKey::COUNT {
            key_states[index] = KeyState::from_raw_states(self.keys_old[index], self.keys_new[index]);
        }

        let mut button_states = [KeyState::NotPressed; GameButton::COUNT];
        for index in 0..GameButton::COUNT {
            button_states[index] =
                KeyState::from_raw_states(self.buttons_old[index], self.buttons_new[index]);
        }

        let pointer_delta = self.pointer_delta.take();

        self.keys_old = self.keys_new;
        self.buttons_old = self.buttons_new;

        ProcessedInputState {
            key_states,
            button_states,
            pointer_delta,
        }
    }

    /// Resets all input state to released.
    ///
    /// Called when the window loses focus or pointer capture ends, so keys
    /// released while unfocused cannot stay stuck down.
    pub fn reset_inputs(&mut self) {
        self.keys_old = [false; GameKey::COUNT];
        self.keys_new = [false; GameKey::COUNT];
        self.buttons_old = [false; GameButton::COUNT];
        self.buttons_new = [false; GameButton::COUNT];
        self.pointer_delta = None;
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit window events cannot be constructed outside an event loop, so
    // these tests drive the raw tables directly.

    #[test]
    fn press_then_hold_then_release_transitions() {
        let mut manager = InputManager::new();

        manager.keys_new[GameKey::Forward.index()] = true;
        let snapshot = manager.get_and_reset_processed_input();
        assert_eq!(snapshot.key_state(GameKey::Forward), KeyState::Pressed);

        let snapshot = manager.get_and_reset_processed_input();
        assert_eq!(snapshot.key_state(GameKey::Forward), KeyState::Held);

        manager.keys_new[GameKey::Forward.index()] = false;
        let snapshot = manager.get_and_reset_processed_input();
        assert_eq!(snapshot.key_state(GameKey::Forward), KeyState::Released);

        let snapshot = manager.get_and_reset_processed_input();
        assert_eq!(snapshot.key_state(GameKey::Forward), KeyState::NotPressed);
    }

    #[test]
    fn pointer_deltas_accumulate_and_drain() {
        let mut manager = InputManager::new();

        manager.intake_pointer_motion((2.0, -1.0));
        manager.intake_pointer_motion((0.5, 3.0));

        let snapshot = manager.get_and_reset_processed_input();
        assert_eq!(snapshot.pointer_delta(), Some((2.5, 2.0)));

        let snapshot = manager.get_and_reset_processed_input();
        assert_eq!(snapshot.pointer_delta(), None);
    }

    #[test]
    fn reset_clears_held_keys_and_buttons() {
        let mut manager = InputManager::new();
        manager.keys_new[GameKey::Jump.index()] = true;
        manager.buttons_new[GameButton::Primary.index()] = true;
        let _ = manager.get_and_reset_processed_input();

        manager.reset_inputs();

        let snapshot = manager.get_and_reset_processed_input();
        assert_eq!(snapshot.key_state(GameKey::Jump), KeyState::NotPressed);
        assert_eq!(
            snapshot.button_state(GameButton::Primary),
            KeyState::NotPressed
        );
    }
}
