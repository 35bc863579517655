#![cfg(not(target_arch = "wasm32"))]

mod common;

use common::{Call, FakeHost};
use hero_banner::{Banner, BannerConfig};

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn repeated_resize_is_a_no_op() {
    let host = FakeHost::page(1920.0, 1080.0);
    let mut banner = Banner::mount(&host, BannerConfig::default()).expect("mount");
    let aspect = banner.camera().aspect;
    let viewport = banner.viewport();
    let calls = host.calls().len();

    assert!(!banner.resize(1.0));
    assert!(!banner.resize(1.0));

    assert_eq!(banner.camera().aspect, aspect);
    assert_eq!(banner.viewport(), viewport);
    assert_eq!(host.calls().len(), calls);
}

#[test]
fn aspect_tracks_surface_shape() {
    // Wide then tall, as on a phone rotating.
    let host = FakeHost::page(1920.0, 1080.0);
    let mut banner = Banner::mount(&host, BannerConfig::default()).expect("mount");
    assert!(approx_eq(banner.camera().aspect, 1920.0 / 1080.0));

    host.resize_surface(1080.0, 1920.0);
    assert!(banner.resize(1.0));
    assert!(approx_eq(banner.camera().aspect, 1080.0 / 1920.0));
    assert_eq!(host.calls().last(), Some(&Call::SetBufferSize(1080, 1920)));
}

#[test]
fn pixel_ratio_change_resizes_buffer_only() {
    let host = FakeHost::page(800.0, 200.0);
    let mut banner = Banner::mount(&host, BannerConfig::default()).expect("mount");
    let aspect = banner.camera().aspect;

    assert!(banner.resize(1.5));
    assert_eq!(host.calls().last(), Some(&Call::SetBufferSize(1200, 300)));
    assert_eq!(banner.camera().aspect, aspect);

    // Anything above the cap lands on the same buffer as the cap itself.
    assert!(banner.resize(3.0));
    assert!(!banner.resize(2.0));
    assert_eq!(host.calls().last(), Some(&Call::SetBufferSize(1600, 400)));
}

#[test]
fn hidden_surface_keeps_a_valid_buffer() {
    let host = FakeHost::page(0.0, 0.0);
    let banner = Banner::mount(&host, BannerConfig::default()).expect("mount");
    assert_eq!(host.calls().last(), Some(&Call::SetBufferSize(1, 1)));
    assert!(approx_eq(banner.camera().aspect, 1.0));
}
