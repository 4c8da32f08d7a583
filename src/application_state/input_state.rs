//! # Input State
//!
//! This module defines the input snapshot types sampled by the frame loop.
//! Instead of a dynamically keyed map, the recognized inputs form a fixed
//! enumerated set backed by fixed-size boolean tables, so an unrecognized key
//! can never grow the state or alias a real binding.

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Represents the per-frame state of a key or button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyState {
    /// Not pressed this frame or the last.
    #[default]
    NotPressed,
    /// Went down this frame.
    Pressed,
    /// Down this frame and the last.
    Held,
    /// Went up this frame.
    Released,
}

impl KeyState {
    /// True while the input is down, whether it just went down or is held.
    pub fn is_active(&self) -> bool {
        matches!(self, KeyState::Pressed | KeyState::Held)
    }

    /// True only on the frame the input went down.
    pub fn is_just_pressed(&self) -> bool {
        matches!(self, KeyState::Pressed)
    }

    /// Derives the transition state from the previous and current raw states.
    pub fn from_raw_states(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => KeyState::Pressed,
            (true, true) => KeyState::Held,
            (true, false) => KeyState::Released,
            (false, false) => KeyState::NotPressed,
        }
    }
}

/// The fixed set of keyboard inputs the sandbox recognizes.
///
/// The discriminant indexes the boolean tables in the input manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    /// Move toward the view direction (W).
    Forward,
    /// Move away from the view direction (S).
    Backward,
    /// Strafe left (A).
    StrafeLeft,
    /// Strafe right (D).
    StrafeRight,
    /// Jump (Space).
    Jump,
    /// Select hotbar slot 1.
    Slot1,
    /// Select hotbar slot 2.
    Slot2,
    /// Select hotbar slot 3.
    Slot3,
    /// Select hotbar slot 4.
    Slot4,
    /// Select hotbar slot 5.
    Slot5,
    /// Select hotbar slot 6.
    Slot6,
    /// Select hotbar slot 7.
    Slot7,
    /// Select hotbar slot 8.
    Slot8,
    /// Select hotbar slot 9.
    Slot9,
}

impl GameKey {
    /// Number of recognized keys; sizes the boolean tables.
    pub const COUNT: usize = 14;

    /// The slot-selection keys in hotbar order.
    pub const SLOT_KEYS: [GameKey; 9] = [
        GameKey::Slot1,
        GameKey::Slot2,
        GameKey::Slot3,
        GameKey::Slot4,
        GameKey::Slot5,
        GameKey::Slot6,
        GameKey::Slot7,
        GameKey::Slot8,
        GameKey::Slot9,
    ];

    /// Maps a physical key code to its game binding, if any.
    ///
    /// Unrecognized keys map to `None` and are dropped at this boundary.
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW => Some(GameKey::Forward),
            KeyCode::KeyS => Some(GameKey::Backward),
            KeyCode::KeyA => Some(GameKey::StrafeLeft),
            KeyCode::KeyD => Some(GameKey::StrafeRight),
            KeyCode::Space => Some(GameKey::Jump),
            KeyCode::Digit1 => Some(GameKey::Slot1),
            KeyCode::Digit2 => Some(GameKey::Slot2),
            KeyCode::Digit3 => Some(GameKey::Slot3),
            KeyCode::Digit4 => Some(GameKey::Slot4),
            KeyCode::Digit5 => Some(GameKey::Slot5),
            KeyCode::Digit6 => Some(GameKey::Slot6),
            KeyCode::Digit7 => Some(GameKey::Slot7),
            KeyCode::Digit8 => Some(GameKey::Slot8),
            KeyCode::Digit9 => Some(GameKey::Slot9),
            _ => None,
        }
    }

    /// Returns this key's index into the boolean tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The two mouse buttons the sandbox recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameButton {
    /// The break-block button (left).
    Primary,
    /// The place-block button (right).
    Secondary,
}

impl GameButton {
    /// Number of recognized buttons; sizes the boolean tables.
    pub const COUNT: usize = 2;

    /// Maps a winit mouse button to its game binding, if any.
    pub fn from_mouse_button(button: MouseButton) -> Option<Self> {
        match button {
            MouseButton::Left => Some(GameButton::Primary),
            MouseButton::Right => Some(GameButton::Secondary),
            _ => None,
        }
    }

    /// Returns this button's index into the boolean tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A snapshot of the processed input for one frame, with state transitions
/// already derived.
pub struct ProcessedInputState {
    /// Transition state of every recognized key.
    pub key_states: [KeyState; GameKey::COUNT],
    /// Transition state of every recognized mouse button.
    pub button_states: [KeyState; GameButton::COUNT],
    /// Pointer movement accumulated since the previous frame, if any.
    pub pointer_delta: Option<(f64, f64)>,
}

impl ProcessedInputState {
    /// Gets the transition state of a key.
    pub fn key_state(&self, key: GameKey) -> KeyState {
        self.key_states[key.index()]
    }

    /// Gets the transition state of a mouse button.
    pub fn button_state(&self, button: GameButton) -> KeyState {
        self.button_states[button.index()]
    }

    /// Gets the pointer movement accumulated since the previous frame.
    pub fn pointer_delta(&self) -> Option<(f64, f64)> {
        self.pointer_delta
    }
}
