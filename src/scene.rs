//! Backend-neutral description of what gets drawn each frame.
//!
//! A motif builds its [`Layer`]s once; the graphics backend uploads them in
//! `prepare` and, every frame, re-uploads positions of layers marked
//! `dynamic` before drawing.

use glam::Mat4;

use crate::shaders::ShaderKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Points,
    Triangles,
    Lines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    /// Source-over with depth writes.
    Normal,
    /// `src * alpha + dst`, no depth writes; the default, used for every glow.
    Additive,
}

/// Extra per-vertex attribute bound at location 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub data: Vec<f32>,
    /// Components per vertex (1..=4).
    pub size: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: &'static str,
    pub shader: ShaderKind,
    pub primitive: Primitive,
    pub blend: Blend,
    /// xyz triples, bound at location 0.
    pub positions: Vec<f32>,
    pub aux: Option<Attribute>,
    pub indices: Option<Vec<u32>>,
    /// Positions change every frame and must be re-uploaded.
    pub dynamic: bool,
    pub model: Mat4,
    pub color: [f32; 3],
    pub opacity: f32,
    /// Motif-specific shader parameters (`uParams`).
    pub params: [f32; 4],
    pub point_size: f32,
    /// Numerator of the depth attenuation, `size * scale / depth`.
    pub point_scale: f32,
}

impl Layer {
    pub fn new(name: &'static str, shader: ShaderKind, primitive: Primitive) -> Self {
        Self {
            name,
            shader,
            primitive,
            blend: Blend::Additive,
            positions: Vec::new(),
            aux: None,
            indices: None,
            dynamic: false,
            model: Mat4::IDENTITY,
            color: [1.0; 3],
            opacity: 1.0,
            params: [0.0; 4],
            point_size: 1.0,
            point_scale: 1.0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of elements the draw call covers.
    pub fn element_count(&self) -> usize {
        match &self.indices {
            Some(idx) => idx.len(),
            None => self.vertex_count(),
        }
    }
}

/// Uniforms shared by every layer in a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub projection: Mat4,
    pub view: Mat4,
    /// Elapsed seconds.
    pub time: f32,
    pub pixel_ratio: f32,
    pub buffer_size: (u32, u32),
}
