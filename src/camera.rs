//! Perspective camera and the small parallax motions the motifs apply to it.

use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov: f32, near: f32, far: f32, position: Vec3) -> Self {
        Self {
            fov,
            aspect: 2.0,
            near,
            far,
            position,
            target: Vec3::ZERO,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// GL clip-space projection (depth in `[-1, 1]`).
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}

/// Per-frame perturbation of the camera position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMotion {
    Still,
    /// Slow side-to-side drift keyed on the frame count:
    /// `x = sin(frames * step) * radius`.
    Drift { step: f32, radius: f32 },
    /// Time-based sway in X and Y.
    Sway { amount: f32 },
}

impl CameraMotion {
    /// Place the camera for this frame, starting from its resting position.
    pub fn apply(&self, camera: &mut PerspectiveCamera, rest: Vec3, elapsed: f64, frames: u64) {
        camera.position = match *self {
            Self::Still => rest,
            Self::Drift { step, radius } => {
                let phase = (frames as f64 * step as f64) as f32;
                Vec3::new(phase.sin() * radius, rest.y, rest.z)
            }
            Self::Sway { amount } => {
                let t = elapsed as f32;
                Vec3::new(
                    rest.x + (t * 0.15).sin() * amount,
                    rest.y + (t * 0.12).cos() * amount * 0.4,
                    rest.z,
                )
            }
        };
    }
}
