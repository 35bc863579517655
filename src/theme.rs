//! Scene colors, optionally themed by CSS custom properties on the page.

use crate::error::ThemeError;

/// Linear-ish RGB triple in `[0, 1]`, as handed to shader uniforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
    }

    /// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `rgb(r g b)`.
    pub fn parse(input: &str) -> Result<Self, ThemeError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ThemeError::Empty);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ThemeError::Syntax(s.to_string()));
        }
        if let Some(body) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            let channels: Vec<&str> = body
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .collect();
            if channels.len() != 3 {
                return Err(ThemeError::Syntax(s.to_string()));
            }
            let mut out = [0u8; 3];
            for (slot, raw) in out.iter_mut().zip(&channels) {
                *slot = raw.parse().map_err(|_| ThemeError::Channel(s.to_string()))?;
            }
            return Ok(Self::from_u8(out[0], out[1], out[2]));
        }
        Err(ThemeError::Syntax(s.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let nibble = |c: char| c.to_digit(16).map(|d| d as u8);
    let chars: Vec<char> = hex.chars().collect();
    match chars.len() {
        3 => {
            let r = nibble(chars[0])?;
            let g = nibble(chars[1])?;
            let b = nibble(chars[2])?;
            Some(Rgb::from_u8(r * 17, g * 17, b * 17))
        }
        6 => {
            let byte = |i: usize| Some(nibble(chars[i])? * 16 + nibble(chars[i + 1])?);
            Some(Rgb::from_u8(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

pub const ACCENT_PROPERTY: &str = "--hero-accent";
pub const ACCENT_ALT_PROPERTY: &str = "--hero-accent-2";
pub const WIRE_PROPERTY: &str = "--hero-wire";

/// Colors shared by every motif.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Brand green; dots and the first ribbon.
    pub accent: Rgb,
    /// Second ribbon and particle tint.
    pub accent_alt: Rgb,
    /// Knot wireframe.
    pub wire: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Rgb::from_u8(0x00, 0xe2, 0x7a),
            accent_alt: Rgb::from_u8(0x3b, 0x82, 0xf6),
            wire: Rgb::from_u8(0x00, 0xe2, 0x7a),
        }
    }
}

impl Theme {
    /// Build a theme from a property lookup, keeping the literal fallback for
    /// any property that is absent or unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fallback = Self::default();
        let pick = |name: &str, default: Rgb| match lookup(name) {
            Some(raw) if !raw.trim().is_empty() => Rgb::parse(&raw).unwrap_or_else(|err| {
                log::warn!("ignoring {name}: {err}");
                default
            }),
            _ => default,
        };
        Self {
            accent: pick(ACCENT_PROPERTY, fallback.accent),
            accent_alt: pick(ACCENT_ALT_PROPERTY, fallback.accent_alt),
            wire: pick(WIRE_PROPERTY, fallback.wire),
        }
    }
}
