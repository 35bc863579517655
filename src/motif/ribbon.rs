//! Glowing ribbons over a sparse cloud of drifting particles.
//!
//! Ribbon displacement and particle drift run in the vertex shaders off the
//! time uniform. [`displacement`] evaluates the ribbon expression on the CPU
//! with the same `uParams` the shader receives.

use glam::{Mat4, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::camera::{CameraMotion, PerspectiveCamera};
use crate::config::RibbonParams;
use crate::scene::{Attribute, Layer, Primitive};
use crate::shaders::ShaderKind;
use crate::surface::Viewport;
use crate::theme::Theme;

/// Drift reach of a particle around its home position, world units.
const PARTICLE_DRIFT: f32 = 0.15;
/// Attenuation numerator for particle sprites, before the pixel ratio.
const PARTICLE_DEPTH_SCALE: f32 = 10.0;

/// Vertical offset of a ribbon vertex at `x` after `t` seconds.
pub fn displacement(amplitude: f32, frequency: f32, phase: f32, speed: f32, x: f32, t: f32) -> f32 {
    amplitude * (x * frequency + phase + 0.35 * speed * t).sin()
}

/// Plane in XY, `segments` quads along X and one along Y, with UVs.
fn strip(width: f32, height: f32, segments: u32) -> (Vec<f32>, Vec<f32>, Vec<u32>) {
    let cols = segments + 1;
    let mut positions = Vec::with_capacity(cols as usize * 6);
    let mut uvs = Vec::with_capacity(cols as usize * 4);
    for row in 0..2u32 {
        let v = row as f32;
        for col in 0..cols {
            let u = col as f32 / segments as f32;
            positions.extend_from_slice(&[(u - 0.5) * width, (v - 0.5) * height, 0.0]);
            uvs.extend_from_slice(&[u, v]);
        }
    }
    let mut indices = Vec::with_capacity(segments as usize * 6);
    for col in 0..segments {
        let a = col;
        let b = col + 1;
        let c = cols + col + 1;
        let d = cols + col;
        indices.extend_from_slice(&[a, b, d, b, c, d]);
    }
    (positions, uvs, indices)
}

pub struct RibbonField {
    params: RibbonParams,
    layers: Vec<Layer>,
}

impl RibbonField {
    pub fn new(params: &RibbonParams, theme: &Theme) -> Self {
        let mut layers = Vec::with_capacity(params.count as usize + 1);
        let (positions, uvs, indices) = strip(params.width, params.height, params.segments);

        for i in 0..params.count {
            let mut layer = Layer::new("ribbon", ShaderKind::Ribbon, Primitive::Triangles);
            layer.positions = positions.clone();
            layer.aux = Some(Attribute { data: uvs.clone(), size: 2 });
            layer.indices = Some(indices.clone());
            layer.color = if i % 2 == 0 { theme.accent.0 } else { theme.accent_alt.0 };
            layer.opacity = params.opacity;
            layer.params = [
                params.amplitude,
                params.frequency,
                ribbon_phase(i),
                params.speed,
            ];
            let fi = i as f32;
            layer.model = Mat4::from_translation(Vec3::new(0.0, -0.4 * fi, -1.2 * fi))
                * Mat4::from_rotation_z(-0.06 + 0.12 * fi);
            layers.push(layer);
        }

        layers.push(particle_layer(params, theme));
        Self {
            params: params.clone(),
            layers,
        }
    }

    pub fn camera(&self) -> (PerspectiveCamera, CameraMotion) {
        let camera = PerspectiveCamera::new(45.0, 0.1, 100.0, Vec3::new(0.0, 0.5, 10.0));
        (camera, CameraMotion::Sway { amount: self.params.sway })
    }

    /// Ribbon vertices are displaced on the GPU from the time uniform, and
    /// particle drift likewise; nothing to recompute here.
    pub fn update(&mut self, _t: f32) {}

    pub fn resize(&mut self, _viewport: &Viewport) {}

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Evaluate ribbon `index`'s displacement the way its shader does.
    pub fn ribbon_displacement(&self, index: u32, x: f32, t: f32) -> f32 {
        let p = &self.params;
        displacement(p.amplitude, p.frequency, ribbon_phase(index), p.speed, x, t)
    }
}

fn ribbon_phase(index: u32) -> f32 {
    index as f32 * std::f32::consts::FRAC_PI_2
}

fn particle_layer(params: &RibbonParams, theme: &Theme) -> Layer {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let n = params.particles as usize;
    let mut positions = Vec::with_capacity(n * 3);
    let mut seeds = Vec::with_capacity(n);
    for _ in 0..n {
        positions.push(rng.random_range(-14.0f32..14.0));
        positions.push(rng.random_range(-3.0f32..4.0));
        positions.push(rng.random_range(-8.0f32..2.0));
        seeds.push(rng.random::<f32>());
    }

    let mut layer = Layer::new("particles", ShaderKind::Particles, Primitive::Points);
    layer.positions = positions;
    layer.aux = Some(Attribute { data: seeds, size: 1 });
    layer.color = theme.accent_alt.0;
    layer.opacity = 0.8;
    layer.point_size = params.particle_size;
    layer.point_scale = PARTICLE_DEPTH_SCALE;
    layer.params = [PARTICLE_DRIFT, 0.0, 0.0, 0.0];
    layer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaders::{PARTICLE_RATE_X, PARTICLE_RATE_Y};

    // Mirrors of the `PARTICLES_VERT` expressions; `shaders.rs` checks the
    // source uses the same rates and size formula.
    fn particle_offset(seed: f32, t: f32) -> (f32, f32) {
        let phase = seed * std::f32::consts::TAU;
        (
            (t * PARTICLE_RATE_X + phase).sin() * PARTICLE_DRIFT,
            (t * PARTICLE_RATE_Y + phase).cos() * PARTICLE_DRIFT,
        )
    }

    fn particle_point_size(size: f32, pixel_ratio: f32, depth: f32) -> f32 {
        size * pixel_ratio * (PARTICLE_DEPTH_SCALE / depth.max(0.001))
    }

    #[test]
    fn strip_topology() {
        let (pos, uv, idx) = strip(2.0, 1.0, 4);
        assert_eq!(pos.len() / 3, 10);
        assert_eq!(uv.len() / 2, 10);
        assert_eq!(idx.len(), 24);
        assert!(idx.iter().all(|&i| i < 10));
        assert_eq!(&pos[..3], &[-1.0, -0.5, 0.0]);
    }

    #[test]
    fn particles_are_seeded() {
        let p = RibbonParams::default();
        let a = particle_layer(&p, &Theme::default());
        let b = particle_layer(&p, &Theme::default());
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.vertex_count(), p.particles as usize);
    }

    #[test]
    fn particle_layer_feeds_the_shader() {
        let layer = particle_layer(&RibbonParams::default(), &Theme::default());
        assert_eq!(layer.params[0], PARTICLE_DRIFT);
        assert_eq!(layer.point_scale, PARTICLE_DEPTH_SCALE);
        assert_eq!(layer.shader, ShaderKind::Particles);
    }

    #[test]
    fn particle_size_scales_with_ratio_and_depth() {
        let base = particle_point_size(3.0, 1.0, 10.0);
        assert!((particle_point_size(3.0, 2.0, 10.0) - 2.0 * base).abs() < 1e-5);
        assert!((particle_point_size(3.0, 1.0, 20.0) - 0.5 * base).abs() < 1e-5);
    }

    #[test]
    fn drift_is_small() {
        for i in 0..100 {
            let (dx, dy) = particle_offset(i as f32 / 100.0, i as f32 * 0.37);
            assert!(dx.abs() <= PARTICLE_DRIFT && dy.abs() <= PARTICLE_DRIFT);
        }
    }
}
