//! Wireframe (p, q) torus knot spinning on two axes.

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};

use crate::camera::{CameraMotion, PerspectiveCamera};
use crate::config::KnotParams;
use crate::scene::{Blend, Layer, Primitive};
use crate::shaders::ShaderKind;
use crate::surface::Viewport;
use crate::theme::Theme;

fn curve_point(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}

/// Tube vertices around the knot curve plus wireframe edge indices.
///
/// Vertices form a `(tubular + 1) x (radial + 1)` grid whose last row and
/// column coincide with the first; each grid cell contributes its tube edge,
/// ring edge and diagonal, so no edge is emitted twice.
pub fn knot_wireframe(params: &KnotParams) -> (Vec<f32>, Vec<u32>) {
    let tubular = params.tubular_segments;
    let radial = params.radial_segments;
    let (p, q) = (params.p as f32, params.q as f32);

    let mut positions = Vec::with_capacity((tubular as usize + 1) * (radial as usize + 1) * 3);
    for j in 0..=tubular {
        let u = j as f32 / tubular as f32 * p * TAU;
        let p1 = curve_point(u, p, q, params.radius);
        let p2 = curve_point(u + 0.01, p, q, params.radius);
        let tangent = p2 - p1;
        let mut normal = p2 + p1;
        let binormal = tangent.cross(normal).normalize_or_zero();
        normal = binormal.cross(tangent).normalize_or_zero();

        for i in 0..=radial {
            let v = i as f32 / radial as f32 * TAU;
            let cx = -params.tube * v.cos();
            let cy = params.tube * v.sin();
            let vertex = p1 + normal * cx + binormal * cy;
            positions.extend_from_slice(&vertex.to_array());
        }
    }

    let stride = radial + 1;
    let mut indices = Vec::with_capacity(tubular as usize * radial as usize * 6);
    for j in 1..=tubular {
        for i in 1..=radial {
            let a = stride * (j - 1) + (i - 1);
            let b = stride * j + (i - 1);
            let d = stride * (j - 1) + i;
            indices.extend_from_slice(&[a, b, a, d, b, d]);
        }
    }
    (positions, indices)
}

/// Rotation state derived from the frame count, so angles carry no
/// accumulated rounding however long the page stays open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub step_x: f64,
    pub step_y: f64,
}

impl Spin {
    pub fn angles(&self, frames: u64) -> (f64, f64) {
        (frames as f64 * self.step_x, frames as f64 * self.step_y)
    }

    /// Model matrix for `frames`; angles are reduced mod 2π before narrowing
    /// to `f32`.
    pub fn model(&self, frames: u64) -> Mat4 {
        let (ax, ay) = self.angles(frames);
        let tau = std::f64::consts::TAU;
        Mat4::from_rotation_x(ax.rem_euclid(tau) as f32)
            * Mat4::from_rotation_y(ay.rem_euclid(tau) as f32)
    }
}

pub struct WireKnot {
    spin: Spin,
    layer: Layer,
}

impl WireKnot {
    pub fn new(params: &KnotParams, theme: &Theme) -> Self {
        let (positions, indices) = knot_wireframe(params);
        let mut layer = Layer::new("knot", ShaderKind::Wire, Primitive::Lines);
        // Solid lines with depth writes, so the near side hides the far side.
        layer.blend = Blend::Normal;
        layer.positions = positions;
        layer.indices = Some(indices);
        layer.color = theme.wire.0;
        layer.opacity = params.opacity;
        Self {
            spin: Spin {
                step_x: params.spin_x,
                step_y: params.spin_y,
            },
            layer,
        }
    }

    pub fn camera(&self) -> (PerspectiveCamera, CameraMotion) {
        let camera = PerspectiveCamera::new(50.0, 0.1, 100.0, Vec3::new(0.0, 0.0, 7.0));
        (camera, CameraMotion::Still)
    }

    pub fn update(&mut self, frames: u64) {
        self.layer.model = self.spin.model(frames);
    }

    pub fn resize(&mut self, _viewport: &Viewport) {}

    pub fn spin(&self) -> Spin {
        self.spin
    }

    pub fn layers(&self) -> &[Layer] {
        std::slice::from_ref(&self.layer)
    }
}
