#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use hero_banner::{Banner, BannerConfig, BrowserHost, InitError};

wasm_bindgen_test_configure!(run_in_browser);

fn config(id: &str) -> BannerConfig {
    BannerConfig { surface_id: id.into(), ..BannerConfig::default() }
}

#[wasm_bindgen_test]
fn absent_canvas_is_reported_not_thrown() {
    let result = Banner::mount(&BrowserHost, config("no-such-canvas"));
    assert!(matches!(result, Err(InitError::MissingSurface(_))));
}

#[wasm_bindgen_test(async)]
async fn mounts_on_a_sized_canvas() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id("hero3d-test");
    canvas.set_attribute("style", "width: 400px; height: 100px; display: block").unwrap();
    canvas.set_attribute("data-motif", "knot").unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();

    match Banner::mount(&BrowserHost, config("hero3d-test")) {
        Ok(mut banner) => {
            let (w, h) = banner.viewport().unwrap().buffer_size();
            assert_eq!((canvas.width(), canvas.height()), (w, h));
            assert!(w >= 400 && h >= 100);
            banner.advance(0.016).unwrap();
        }
        // Headless runners without a GPU still must not throw.
        Err(err) => assert!(matches!(err, InitError::MissingCapability), "{err}"),
    }
    canvas.remove();
}
