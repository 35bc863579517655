use wasm_bindgen::JsCast;
use web_sys::{window, HtmlCanvasElement};

use super::webgl::WebGlGraphics;
use crate::host::{Host, Surface};

/// The live page: `window`, `document` and computed styles.
pub struct BrowserHost;

#[derive(Clone)]
pub struct CanvasSurface {
    pub canvas: HtmlCanvasElement,
}

impl Surface for CanvasSurface {
    fn layout_size(&self) -> (f64, f64) {
        let rect = self.canvas.get_bounding_client_rect();
        (rect.width(), rect.height())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.canvas.get_attribute(name)
    }
}

impl Host for BrowserHost {
    type Surface = CanvasSurface;
    type Graphics = WebGlGraphics;

    fn find_surface(&self, id: &str) -> Option<CanvasSurface> {
        let canvas = window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        Some(CanvasSurface { canvas })
    }

    fn graphics(&self, surface: &CanvasSurface) -> Option<WebGlGraphics> {
        match WebGlGraphics::new(surface.canvas.clone()) {
            Ok(gfx) => Some(gfx),
            Err(err) => {
                log::warn!("webgl2 context: {err:?}");
                None
            }
        }
    }

    fn device_pixel_ratio(&self) -> f64 {
        window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
    }

    fn style_property(&self, name: &str) -> Option<String> {
        let window = window()?;
        let root = window.document()?.document_element()?;
        let style = window.get_computed_style(&root).ok()??;
        let value = style.get_property_value(name).ok()?;
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}
