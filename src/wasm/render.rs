use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

use super::dom::{BrowserHost, CanvasSurface};
use super::webgl::WebGlGraphics;
use crate::clock::FrameTimer;
use crate::host::Host;
use crate::Banner;

type BrowserBanner = Banner<CanvasSurface, WebGlGraphics>;

/// Install the resize listener and start the animation loop. Both run for
/// the life of the page.
pub fn start(banner: BrowserBanner) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let banner = Rc::new(RefCell::new(banner));

    // Zoom changes fire `resize` too, so the pixel ratio is re-read each time.
    let resize_closure = {
        let banner = banner.clone();
        Closure::wrap(Box::new(move || {
            banner.borrow_mut().resize(BrowserHost.device_pixel_ratio());
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut timer = FrameTimer::default();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        let dt = timer.step(now_ms);
        if let Err(err) = banner.borrow_mut().advance(dt) {
            log::error!("hero banner frame failed: {err}");
        }

        // schedule next
        if let Some(window) = web_sys::window() {
            if let Some(cb) = f.borrow().as_ref() {
                if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    log::error!("requestAnimationFrame: {err:?}");
                }
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = g.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }

    Ok(())
}
