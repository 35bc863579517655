//! Drawing-surface geometry: layout box, pixel ratio and buffer size.

/// Upper bound on the pixel ratio; bounds fragment cost on dense displays.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Clamp a host-reported device pixel ratio into `[1, MAX_PIXEL_RATIO]`.
///
/// Non-finite or non-positive reports (some embedded webviews return 0)
/// fall back to 1.
pub fn clamp_pixel_ratio(reported: f64) -> f64 {
    if !reported.is_finite() {
        return 1.0;
    }
    reported.clamp(1.0, MAX_PIXEL_RATIO)
}

/// Snapshot of the surface geometry the renderer sizes itself against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Layout width in CSS pixels, at least 1.
    pub width: f64,
    /// Layout height in CSS pixels, at least 1.
    pub height: f64,
    /// Clamped pixel ratio.
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(css_width: f64, css_height: f64, reported_ratio: f64) -> Self {
        Self {
            width: floor_at_one(css_width),
            height: floor_at_one(css_height),
            pixel_ratio: clamp_pixel_ratio(reported_ratio),
        }
    }

    pub fn aspect(&self) -> f32 {
        (self.width / self.height) as f32
    }

    /// Drawing-buffer size in physical pixels.
    pub fn buffer_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio).floor().max(1.0);
        let h = (self.height * self.pixel_ratio).floor().max(1.0);
        (w as u32, h as u32)
    }
}

fn floor_at_one(v: f64) -> f64 {
    if v.is_finite() { v.max(1.0) } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_capped() {
        assert_eq!(clamp_pixel_ratio(3.0), 2.0);
        assert_eq!(clamp_pixel_ratio(0.0), 1.0);
        assert_eq!(clamp_pixel_ratio(f64::NAN), 1.0);
        assert_eq!(clamp_pixel_ratio(1.5), 1.5);
    }

    #[test]
    fn buffer_follows_ratio() {
        let vp = Viewport::new(800.0, 200.0, 1.5);
        assert_eq!(vp.buffer_size(), (1200, 300));
        assert!((vp.aspect() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn collapsed_layout_keeps_one_pixel() {
        let vp = Viewport::new(0.0, -4.0, 1.0);
        assert_eq!(vp.buffer_size(), (1, 1));
    }
}
