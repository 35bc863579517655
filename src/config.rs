//! Banner configuration: which motif to mount and its tuning constants.
//!
//! Every field has a default, so a page only needs `<canvas id="hero3d">`.
//! The canvas may override the motif through `data-motif` and any constant
//! through a JSON object in `data-banner`, e.g.
//! `data-banner='{"wave": {"cols": 80, "amplitude": 0.5}}'`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

pub const DEFAULT_SURFACE_ID: &str = "hero3d";
pub const MOTIF_ATTRIBUTE: &str = "data-motif";
pub const CONFIG_ATTRIBUTE: &str = "data-banner";

/// The three interchangeable visual designs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motif {
    #[default]
    Waves,
    Ribbons,
    Knot,
}

impl FromStr for Motif {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "waves" | "wave" => Ok(Self::Waves),
            "ribbons" | "ribbon" => Ok(Self::Ribbons),
            "knot" => Ok(Self::Knot),
            other => Err(format!("unknown motif `{other}`")),
        }
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Waves => "waves",
            Self::Ribbons => "ribbons",
            Self::Knot => "knot",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    pub cols: u32,
    pub rows: u32,
    pub spacing: f32,
    pub amplitude: f32,
    pub freq_x: f32,
    pub freq_diagonal: f32,
    pub speed: f32,
    pub primary_weight: f32,
    pub secondary_weight: f32,
    /// Sprite size in world units before attenuation.
    pub point_size: f32,
    /// Per-frame phase step of the camera drift.
    pub drift_step: f32,
    /// Horizontal reach of the camera drift.
    pub drift_radius: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            cols: 140,
            rows: 90,
            spacing: 0.35,
            amplitude: 0.8,
            freq_x: 0.45,
            freq_diagonal: 0.22,
            speed: 0.8,
            primary_weight: 0.6,
            secondary_weight: 0.4,
            point_size: 0.22,
            drift_step: 0.002,
            drift_radius: 1.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RibbonParams {
    pub count: u32,
    pub width: f32,
    pub height: f32,
    pub segments: u32,
    pub amplitude: f32,
    pub frequency: f32,
    pub speed: f32,
    pub opacity: f32,
    pub particles: u32,
    pub particle_size: f32,
    /// Seed for particle placement; fixed so reloads look identical.
    pub seed: u64,
    pub sway: f32,
}

impl Default for RibbonParams {
    fn default() -> Self {
        Self {
            count: 2,
            width: 28.0,
            height: 1.4,
            segments: 200,
            amplitude: 0.9,
            frequency: 0.32,
            speed: 1.0,
            opacity: 0.55,
            particles: 420,
            particle_size: 3.0,
            seed: 0x6865_726f,
            sway: 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct KnotParams {
    pub radius: f32,
    pub tube: f32,
    pub tubular_segments: u32,
    pub radial_segments: u32,
    pub p: u32,
    pub q: u32,
    /// Radians added to the X rotation each frame.
    pub spin_x: f64,
    /// Radians added to the Y rotation each frame.
    pub spin_y: f64,
    pub opacity: f32,
}

impl Default for KnotParams {
    fn default() -> Self {
        Self {
            radius: 1.6,
            tube: 0.42,
            tubular_segments: 160,
            radial_segments: 14,
            p: 2,
            q: 3,
            spin_x: 0.01,
            spin_y: 0.01,
            opacity: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub surface_id: String,
    pub motif: Motif,
    pub wave: WaveParams,
    pub ribbon: RibbonParams,
    pub knot: KnotParams,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            surface_id: DEFAULT_SURFACE_ID.to_string(),
            motif: Motif::default(),
            wave: WaveParams::default(),
            ribbon: RibbonParams::default(),
            knot: KnotParams::default(),
        }
    }
}

impl BannerConfig {
    /// Apply overrides read from the surface element.
    ///
    /// `data-banner` JSON replaces the whole config (missing fields keep their
    /// defaults); `data-motif` wins over a motif named in the JSON. Bad input
    /// is logged and skipped.
    pub fn with_overrides(mut self, motif: Option<&str>, json: Option<&str>) -> Self {
        if let Some(raw) = json.filter(|s| !s.trim().is_empty()) {
            match serde_json::from_str::<BannerConfig>(raw) {
                Ok(parsed) => {
                    let surface_id = std::mem::take(&mut self.surface_id);
                    self = parsed;
                    self.surface_id = surface_id;
                }
                Err(err) => log::warn!("ignoring malformed {CONFIG_ATTRIBUTE}: {err}"),
            }
        }
        if let Some(raw) = motif {
            match raw.parse() {
                Ok(m) => self.motif = m,
                Err(err) => log::warn!("ignoring {MOTIF_ATTRIBUTE}: {err}"),
            }
        }
        self.sanitized()
    }

    /// Clamp counts so generated geometry is never empty and never larger
    /// than a banner can sensibly upload.
    pub fn sanitized(mut self) -> Self {
        self.wave.cols = bounded("wave.cols", self.wave.cols, 1, MAX_GRID_SIDE);
        self.wave.rows = bounded("wave.rows", self.wave.rows, 1, MAX_GRID_SIDE);
        self.ribbon.count = bounded("ribbon.count", self.ribbon.count, 0, MAX_RIBBONS);
        self.ribbon.segments = bounded("ribbon.segments", self.ribbon.segments, 1, MAX_RIBBON_SEGMENTS);
        self.ribbon.particles = bounded("ribbon.particles", self.ribbon.particles, 0, MAX_PARTICLES);
        self.knot.tubular_segments =
            bounded("knot.tubular_segments", self.knot.tubular_segments, 3, MAX_TUBULAR_SEGMENTS);
        self.knot.radial_segments =
            bounded("knot.radial_segments", self.knot.radial_segments, 3, MAX_RADIAL_SEGMENTS);
        self.knot.p = bounded("knot.p", self.knot.p, 1, MAX_WINDINGS);
        self.knot.q = bounded("knot.q", self.knot.q, 1, MAX_WINDINGS);
        self
    }
}

pub const MAX_GRID_SIDE: u32 = 1024;
pub const MAX_RIBBONS: u32 = 16;
pub const MAX_RIBBON_SEGMENTS: u32 = 4096;
pub const MAX_PARTICLES: u32 = 50_000;
pub const MAX_TUBULAR_SEGMENTS: u32 = 2048;
pub const MAX_RADIAL_SEGMENTS: u32 = 256;
pub const MAX_WINDINGS: u32 = 64;

fn bounded(name: &str, value: u32, min: u32, max: u32) -> u32 {
    let clamped = value.clamp(min, max);
    if value > max {
        log::warn!("{name}={value} exceeds {max}; clamping");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motif_names() {
        assert_eq!("Ribbons".parse::<Motif>(), Ok(Motif::Ribbons));
        assert_eq!(" knot ".parse::<Motif>(), Ok(Motif::Knot));
        assert!("torus".parse::<Motif>().is_err());
        assert_eq!(Motif::Waves.to_string(), "waves");
    }

    #[test]
    fn json_overrides_merge_with_defaults() {
        let cfg = BannerConfig::default()
            .with_overrides(None, Some(r#"{"motif": "knot", "knot": {"p": 3, "q": 5}}"#));
        assert_eq!(cfg.motif, Motif::Knot);
        assert_eq!((cfg.knot.p, cfg.knot.q), (3, 5));
        assert_eq!(cfg.knot.spin_x, 0.01);
        assert_eq!(cfg.wave, WaveParams::default());
        assert_eq!(cfg.surface_id, DEFAULT_SURFACE_ID);
    }

    #[test]
    fn motif_attribute_wins() {
        let cfg = BannerConfig::default()
            .with_overrides(Some("ribbons"), Some(r#"{"motif": "knot"}"#));
        assert_eq!(cfg.motif, Motif::Ribbons);
    }

    #[test]
    fn malformed_input_keeps_defaults() {
        let cfg = BannerConfig::default().with_overrides(Some("spiral"), Some("{nope"));
        assert_eq!(cfg, BannerConfig::default());
    }

    #[test]
    fn oversized_counts_are_clamped() {
        let cfg = BannerConfig::default().with_overrides(
            None,
            Some(
                r#"{"wave": {"cols": 70000, "rows": 70000},
                    "ribbon": {"count": 999, "segments": 4000000000, "particles": 4000000000},
                    "knot": {"tubular_segments": 4000000000, "radial_segments": 4000000000, "p": 1000}}"#,
            ),
        );
        assert_eq!((cfg.wave.cols, cfg.wave.rows), (MAX_GRID_SIDE, MAX_GRID_SIDE));
        assert_eq!(cfg.ribbon.count, MAX_RIBBONS);
        assert_eq!(cfg.ribbon.segments, MAX_RIBBON_SEGMENTS);
        assert_eq!(cfg.ribbon.particles, MAX_PARTICLES);
        assert_eq!(cfg.knot.tubular_segments, MAX_TUBULAR_SEGMENTS);
        assert_eq!(cfg.knot.radial_segments, MAX_RADIAL_SEGMENTS);
        assert_eq!(cfg.knot.p, MAX_WINDINGS);
    }

    #[test]
    fn zero_counts_are_clamped() {
        let cfg = BannerConfig::default()
            .with_overrides(None, Some(r#"{"wave": {"cols": 0, "rows": 0}}"#));
        assert_eq!((cfg.wave.cols, cfg.wave.rows), (1, 1));
    }
}
