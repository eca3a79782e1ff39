//! First-person player body driven by sampled input.

use glam::Vec3;

use hunt_core::commands::PlayerInput;
use hunt_core::constants::{PLAYER_EYE_HEIGHT, PLAYER_PITCH_LIMIT};
use hunt_core::level::Room;
use hunt_core::state::PlayerView;
use hunt_core::types::look_direction;

/// Player eye position and view angles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Player {
    /// Eye position.
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

/// How input maps onto motion.
#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    pub move_speed: f32,
    pub look_sensitivity: f32,
}

impl Player {
    /// Stand in the middle of `room`, facing `-z`.
    pub fn spawn_in(room: &Room) -> Self {
        Self {
            position: room.center + Vec3::Y * PLAYER_EYE_HEIGHT,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Unit direction the player is looking (and firing) along.
    pub fn look_direction(&self) -> Vec3 {
        look_direction(self.yaw, self.pitch)
    }

    /// Rotate by the look delta, then walk on the horizontal plane.
    /// The result stays inside `bounds` when given. Non-finite input is ignored.
    pub fn apply_input(
        &mut self,
        input: &PlayerInput,
        dt: f32,
        tuning: &PlayerTuning,
        bounds: Option<(Vec3, Vec3)>,
    ) {
        if input.look_delta.is_finite() {
            self.yaw += input.look_delta.x * tuning.look_sensitivity;
            self.pitch = (self.pitch + input.look_delta.y * tuning.look_sensitivity)
                .clamp(-PLAYER_PITCH_LIMIT, PLAYER_PITCH_LIMIT);
        }

        if !input.move_vector.is_finite() {
            return;
        }
        let mut wish = input.move_vector;
        if wish.length_squared() > 1.0 {
            wish = wish.normalize();
        }

        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let forward = Vec3::new(sin_yaw, 0.0, -cos_yaw);
        let right = Vec3::new(cos_yaw, 0.0, sin_yaw);
        self.position += (right * wish.x + forward * wish.y) * tuning.move_speed * dt;

        if let Some((min, max)) = bounds {
            self.position.x = self.position.x.clamp(min.x, max.x);
            self.position.z = self.position.z.clamp(min.z, max.z);
        }
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            position: self.position,
            yaw: self.yaw,
            pitch: self.pitch,
        }
    }
}
