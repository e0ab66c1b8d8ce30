//! Orbit camera shared by the web and native front-ends.
//!
//! Platform-free: the front-ends feed it pointer deltas and wheel steps and
//! read a view-projection matrix back each frame. Damping mirrors the feel
//! of the usual orbit controls without pulling in an interaction library.

use crate::constants::{CAMERA_FOVY_RADIANS, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec3};

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        OrbitCamera {
            target: Vec3::ZERO,
            yaw: 0.65,
            pitch: 0.35,
            distance: 3.5,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
        }
    }
}

impl OrbitCamera {
    const PITCH_LIMIT: f32 = 1.5;
    const DISTANCE_MIN: f32 = 0.5;
    const DISTANCE_MAX: f32 = 20.0;
    const DAMPING_PER_SEC: f32 = 8.0;

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + Vec3::new(
                self.distance * cos_pitch * sin_yaw,
                self.distance * sin_pitch,
                self.distance * cos_pitch * cos_yaw,
            )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOVY_RADIANS, aspect.max(1e-3), CAMERA_ZNEAR, CAMERA_ZFAR)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Feed a pointer drag delta in canvas pixels.
    pub fn orbit(&mut self, dx_px: f32, dy_px: f32) {
        self.yaw_velocity -= dx_px * 0.005;
        self.pitch_velocity += dy_px * 0.005;
    }

    /// Feed a wheel step; positive zooms out.
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance * (1.0 + steps * 0.1))
            .clamp(Self::DISTANCE_MIN, Self::DISTANCE_MAX);
    }

    /// Advance damping; call once per frame.
    pub fn update(&mut self, dt_sec: f32) {
        self.yaw += self.yaw_velocity;
        self.pitch = (self.pitch + self.pitch_velocity)
            .clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
        let decay = (-Self::DAMPING_PER_SEC * dt_sec).exp();
        self.yaw_velocity *= decay;
        self.pitch_velocity *= decay;
    }
}
