//! Animated 3D hero banner for a landing page, rendered with WebGL2.
//!
//! One of three motifs is drawn onto `<canvas id="hero3d">`: a rippling dot
//! field, glowing ribbons over drifting particles, or a spinning wireframe
//! torus knot. Everything except the browser glue in `wasm` is plain Rust
//! and runs in host tests.

pub mod banner;
pub mod camera;
pub mod clock;
pub mod config;
pub mod error;
pub mod host;
pub mod motif;
pub mod scene;
pub mod shaders;
pub mod surface;
pub mod theme;

pub use banner::Banner;
pub use config::{BannerConfig, Motif};
pub use error::{InitError, RenderError};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod dom;
    mod render;
    mod webgl;

    pub use dom::BrowserHost;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        // A missing canvas or WebGL2 is logged inside `mount`; the page keeps
        // working without the banner.
        if let Ok(banner) = crate::Banner::mount(&BrowserHost, crate::BannerConfig::default()) {
            render::start(banner)?;
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::BrowserHost;
