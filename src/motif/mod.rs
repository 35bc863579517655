//! The three interchangeable scenes. Exactly one is built per banner.

pub mod knot;
pub mod ribbon;
pub mod wave;

use crate::camera::{CameraMotion, PerspectiveCamera};
use crate::config::{BannerConfig, Motif};
use crate::scene::Layer;
use crate::surface::Viewport;
use crate::theme::Theme;

pub use knot::WireKnot;
pub use ribbon::RibbonField;
pub use wave::WaveField;

pub enum MotifScene {
    Waves(WaveField),
    Ribbons(RibbonField),
    Knot(WireKnot),
}

impl MotifScene {
    pub fn build(config: &BannerConfig, theme: &Theme) -> Self {
        match config.motif {
            Motif::Waves => Self::Waves(WaveField::new(&config.wave, theme)),
            Motif::Ribbons => Self::Ribbons(RibbonField::new(&config.ribbon, theme)),
            Motif::Knot => Self::Knot(WireKnot::new(&config.knot, theme)),
        }
    }

    pub fn motif(&self) -> Motif {
        match self {
            Self::Waves(_) => Motif::Waves,
            Self::Ribbons(_) => Motif::Ribbons,
            Self::Knot(_) => Motif::Knot,
        }
    }

    /// Camera at rest plus the motion applied to it each frame.
    pub fn camera(&self) -> (PerspectiveCamera, CameraMotion) {
        match self {
            Self::Waves(s) => s.camera(),
            Self::Ribbons(s) => s.camera(),
            Self::Knot(s) => s.camera(),
        }
    }

    pub fn update(&mut self, elapsed: f64, frames: u64) {
        match self {
            Self::Waves(s) => s.update(elapsed as f32),
            Self::Ribbons(s) => s.update(elapsed as f32),
            Self::Knot(s) => s.update(frames),
        }
    }

    pub fn resize(&mut self, viewport: &Viewport) {
        match self {
            Self::Waves(s) => s.resize(viewport),
            Self::Ribbons(s) => s.resize(viewport),
            Self::Knot(s) => s.resize(viewport),
        }
    }

    pub fn layers(&self) -> &[Layer] {
        match self {
            Self::Waves(s) => s.layers(),
            Self::Ribbons(s) => s.layers(),
            Self::Knot(s) => s.layers(),
        }
    }
}
