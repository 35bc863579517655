//! Seams between the banner and the page that embeds it.
//!
//! The browser implementation lives in the wasm module; tests supply their
//! own recording host.

use crate::error::RenderError;
use crate::scene::{FrameUniforms, Layer};

/// The element the banner draws into.
pub trait Surface {
    /// Layout box in CSS pixels.
    fn layout_size(&self) -> (f64, f64);

    /// Raw attribute value, used for `data-*` overrides.
    fn attribute(&self, name: &str) -> Option<String>;
}

/// Rendering capability bound to one surface.
pub trait Graphics {
    /// Resize the drawing buffer and the GL viewport.
    fn set_buffer_size(&mut self, width: u32, height: u32);

    /// Compile programs and upload static geometry for `layers`.
    fn prepare(&mut self, layers: &[Layer]) -> Result<(), RenderError>;

    /// Re-upload dynamic positions and draw every layer in order.
    fn draw(&mut self, frame: &FrameUniforms, layers: &[Layer]) -> Result<(), RenderError>;
}

/// Everything the banner reads from its environment.
pub trait Host {
    type Surface: Surface;
    type Graphics: Graphics;

    fn find_surface(&self, id: &str) -> Option<Self::Surface>;

    /// `None` when the surface cannot provide a rendering context.
    fn graphics(&self, surface: &Self::Surface) -> Option<Self::Graphics>;

    fn device_pixel_ratio(&self) -> f64;

    /// Computed value of a CSS custom property on the document root.
    fn style_property(&self, name: &str) -> Option<String>;
}
