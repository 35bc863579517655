//! Wave field: a flat grid of glowing dots whose heights ripple over time.

use glam::Vec3;

use crate::camera::{CameraMotion, PerspectiveCamera};
use crate::config::WaveParams;
use crate::scene::{Layer, Primitive};
use crate::shaders::ShaderKind;
use crate::surface::Viewport;
use crate::theme::Theme;

/// Height of the surface at `(x, z)` after `t` seconds.
///
/// Two layered periodic terms; the magnitude never exceeds
/// `amplitude * (|primary_weight| + |secondary_weight|)`.
pub fn wave_height(p: &WaveParams, x: f32, z: f32, t: f32) -> f32 {
    let primary = (x * p.freq_x + t * p.speed).sin() * p.primary_weight;
    let secondary = ((x + z) * p.freq_diagonal - t * (p.speed * 0.7)).cos() * p.secondary_weight;
    (primary + secondary) * p.amplitude
}

/// Upper bound of [`wave_height`] for the given parameters.
pub fn height_bound(p: &WaveParams) -> f32 {
    p.amplitude.abs() * (p.primary_weight.abs() + p.secondary_weight.abs())
}

/// Grid positions, column-major (x outer, z inner), centered on the origin.
pub fn grid_positions(p: &WaveParams) -> Vec<f32> {
    let mut out = Vec::with_capacity(p.cols as usize * p.rows as usize * 3);
    let half_cols = p.cols as f32 / 2.0;
    let half_rows = p.rows as f32 / 2.0;
    for x in 0..p.cols {
        for z in 0..p.rows {
            out.push((x as f32 - half_cols) * p.spacing);
            out.push(0.0);
            out.push((z as f32 - half_rows) * p.spacing);
        }
    }
    out
}

pub struct WaveField {
    params: WaveParams,
    layer: Layer,
}

impl WaveField {
    pub fn new(params: &WaveParams, theme: &Theme) -> Self {
        let mut layer = Layer::new("wave-dots", ShaderKind::Dots, Primitive::Points);
        layer.positions = grid_positions(params);
        layer.dynamic = true;
        layer.color = theme.accent.0;
        layer.point_size = params.point_size;
        Self {
            params: params.clone(),
            layer,
        }
    }

    pub fn camera(&self) -> (PerspectiveCamera, CameraMotion) {
        let camera = PerspectiveCamera::new(60.0, 0.1, 100.0, Vec3::new(0.0, 12.0, 22.0));
        let motion = CameraMotion::Drift {
            step: self.params.drift_step,
            radius: self.params.drift_radius,
        };
        (camera, motion)
    }

    /// Recompute every point height for time `t`. The grid's x/z never
    /// change, so this is a pure function of the static geometry and `t`.
    pub fn update(&mut self, t: f32) {
        let params = &self.params;
        for point in self.layer.positions.chunks_exact_mut(3) {
            point[1] = wave_height(params, point[0], point[2], t);
        }
    }

    /// Sprite attenuation tracks the buffer height; low-density screens get
    /// slightly larger dots to read the same.
    pub fn resize(&mut self, viewport: &Viewport) {
        let (_, buffer_h) = viewport.buffer_size();
        self.layer.point_scale = buffer_h as f32 * 0.5;
        let boost = if viewport.pixel_ratio <= 1.0 { 1.2 } else { 1.0 };
        self.layer.point_size = self.params.point_size * boost;
    }

    pub fn layers(&self) -> &[Layer] {
        std::slice::from_ref(&self.layer)
    }
}
