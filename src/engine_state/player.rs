//! # Player Module
//!
//! Player position, orientation and velocity, updated once per frame from the
//! sampled input. The physics step uses the damped-velocity model: existing
//! horizontal velocity decays exponentially, movement intent (rotated by the
//! current yaw so it is camera-relative) accelerates it, gravity pulls the
//! vertical component down, and the integrated position is clamped to the
//! ground height.
//!
//! Opposing movement keys cancel; non-opposing combinations sum and the
//! resulting intent is normalized before scaling, so diagonals are no faster
//! than straight lines.

use cgmath::{InnerSpace, Point3, Rad, Vector3, Zero};
use std::f32::consts::FRAC_PI_2;
use web_time::Duration;

use crate::application_state::settings::Settings;
use crate::engine_state::PlayerAction;

/// The player's physical state in the world.
///
/// Created once at startup from the configured spawn position and mutated
/// every frame by [`PlayerState::update`]. The renderer's camera pose is
/// synchronized from this after each step.
#[derive(Debug)]
pub struct PlayerState {
    /// Position in world space. The camera sits exactly here.
    pub position: Point3<f32>,
    /// Horizontal rotation around the vertical axis, radians.
    pub yaw: Rad<f32>,
    /// Vertical rotation, radians, clamped to `[-π/2, π/2]`.
    pub pitch: Rad<f32>,
    /// Current velocity. The vertical component carries gravity and jumps.
    pub velocity: Vector3<f32>,
    /// Set while the player stands on the ground; cleared by jumping.
    pub can_jump: bool,
}

impl PlayerState {
    /// Creates a player at the given spawn position, looking level along the
    /// initial yaw of zero.
    pub fn new(spawn: Point3<f32>) -> Self {
        PlayerState {
            position: spawn,
            yaw: Rad(0.0),
            pitch: Rad(0.0),
            velocity: Vector3::zero(),
            can_jump: false,
        }
    }

    /// Advances the player by one tick.
    ///
    /// # Arguments
    /// * `actions` - The sampled input for this frame
    /// * `dt` - Time elapsed since the previous tick
    /// * `settings` - Movement constants (speed, damping, gravity, ...)
    pub fn update(&mut self, actions: &PlayerAction, dt: Duration, settings: &Settings) {
        let dt = dt.as_secs_f32();

        self.apply_look(actions, settings);

        // Exponential damping of the horizontal velocity.
        self.velocity.x -= self.velocity.x * settings.damping * dt;
        self.velocity.z -= self.velocity.z * settings.damping * dt;

        // Gravity.
        self.velocity.y -= settings.gravity * dt;

        // Camera-relative movement intent.
        let intent = self.movement_intent(actions);
        if !intent.is_zero() {
            self.velocity += intent * settings.walk_acceleration * dt;
        }

        if actions.jump && self.can_jump {
            self.velocity.y = settings.jump_speed;
            self.can_jump = false;
        }

        self.position += self.velocity * dt;

        // Ground clamp: landing zeroes the vertical velocity and re-arms
        // the jump.
        if self.position.y < settings.ground_height {
            self.position.y = settings.ground_height;
            self.velocity.y = 0.0;
            self.can_jump = true;
        }
    }

    /// Returns the normalized camera-forward vector derived from yaw/pitch.
    ///
    /// Used by the ray picker and by the camera-pose sync.
    pub fn look_direction(&self) -> Vector3<f32> {
        let (yaw_sin, yaw_cos) = self.yaw.0.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.0.sin_cos();
        Vector3::new(pitch_cos * yaw_sin, pitch_sin, pitch_cos * yaw_cos).normalize()
    }

    /// Applies accumulated pointer deltas to yaw and pitch.
    ///
    /// `rotate_view` is only populated while pointer capture is active, so no
    /// capture check is needed here. Pitch is clamped to keep the view from
    /// flipping over the vertical.
    fn apply_look(&mut self, actions: &PlayerAction, settings: &Settings) {
        if let Some((delta_x, delta_y)) = actions.rotate_view {
            self.yaw -= Rad(delta_x as f32 * settings.mouse_sensitivity);
            self.pitch -= Rad(delta_y as f32 * settings.mouse_sensitivity);

            if self.pitch < -Rad(FRAC_PI_2) {
                self.pitch = -Rad(FRAC_PI_2);
            } else if self.pitch > Rad(FRAC_PI_2) {
                self.pitch = Rad(FRAC_PI_2);
            }
        }
    }

    /// Builds the horizontal movement intent from the directional keys,
    /// rotated by the current yaw. Returns a unit vector, or zero when the
    /// keys cancel out.
    fn movement_intent(&self, actions: &PlayerAction) -> Vector3<f32> {
        let (yaw_sin, yaw_cos) = self.yaw.0.sin_cos();
        let forward = Vector3::new(yaw_sin, 0.0, yaw_cos);
        let right = Vector3::new(yaw_cos, 0.0, -yaw_sin);

        let mut intent = Vector3::zero();
        if actions.move_forward {
            intent += forward;
        }
        if actions.move_backward {
            intent -= forward;
        }
        if actions.move_right {
            intent += right;
        }
        if actions.move_left {
            intent -= right;
        }

        if intent.is_zero() {
            intent
        } else {
            intent.normalize()
        }
    }
}
