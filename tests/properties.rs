#![cfg(not(target_arch = "wasm32"))]

use std::f64::consts::TAU;

use glam::Mat4;
use proptest::prelude::*;

use hero_banner::config::{KnotParams, WaveParams};
use hero_banner::motif::knot::Spin;
use hero_banner::motif::wave::{height_bound, wave_height};
use hero_banner::surface::{clamp_pixel_ratio, Viewport};

proptest! {
    #[test]
    fn wave_height_is_bounded(x in -50.0f32..50.0, z in -50.0f32..50.0, t in 0.0f32..100_000.0) {
        let p = WaveParams::default();
        let y = wave_height(&p, x, z, t);
        prop_assert!(y.abs() <= height_bound(&p) + 1e-5);
        prop_assert_eq!(y, wave_height(&p, x, z, t));
    }

    #[test]
    fn wave_bound_holds_for_any_tuning(
        amp in -3.0f32..3.0,
        w1 in -2.0f32..2.0,
        w2 in -2.0f32..2.0,
        x in -20.0f32..20.0,
        t in 0.0f32..1_000.0,
    ) {
        let p = WaveParams { amplitude: amp, primary_weight: w1, secondary_weight: w2, ..WaveParams::default() };
        prop_assert!(wave_height(&p, x, -x, t).abs() <= height_bound(&p) + 1e-4);
    }

    #[test]
    fn pixel_ratio_always_in_range(reported in prop::num::f64::ANY) {
        let r = clamp_pixel_ratio(reported);
        prop_assert!((1.0..=2.0).contains(&r));
    }

    #[test]
    fn resize_is_idempotent(w in 0.0f64..4000.0, h in 0.0f64..4000.0, dpr in 0.0f64..4.0) {
        let a = Viewport::new(w, h, dpr);
        let b = Viewport::new(w, h, dpr);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.buffer_size(), b.buffer_size());
    }
}

#[test]
fn default_wave_bound_is_point_eight() {
    assert!((height_bound(&WaveParams::default()) - 0.8).abs() < 1e-6);
}

#[test]
fn knot_spin_advances_by_fixed_step() {
    let params = KnotParams::default();
    let spin = Spin { step_x: params.spin_x, step_y: params.spin_y };
    let mut prev = spin.angles(0);
    for frame in 1..=1_000_000u64 {
        let (ax, ay) = spin.angles(frame);
        assert!(ax > prev.0 && ay > prev.1);
        if frame % 9_973 == 0 {
            let step = ((ax - prev.0) - 0.01).abs();
            assert!(step < 1e-9, "frame {frame}: step error {step}");
        }
        prev = (ax, ay);
    }

    // Far into a long session the angle, compared modulo 2π, is exact.
    let frames = 10_000_000u64;
    let reduced = (100_000.0f64).rem_euclid(TAU) as f32;
    let expected = Mat4::from_rotation_x(reduced) * Mat4::from_rotation_y(reduced);
    assert!(spin.model(frames).abs_diff_eq(expected, 1e-6));
}
