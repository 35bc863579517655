//! GLSL ES 3.00 programs for the three motifs.
//!
//! All programs share one uniform set so the backend can bind them the same
//! way; a program that ignores a uniform simply has no location for it.
//! Attribute 0 is the position, attribute 1 the optional auxiliary stream.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    /// Soft round sprites with perspective attenuation (wave field).
    Dots,
    /// Sine-displaced strips with an edge-to-center glow.
    Ribbon,
    /// Drifting particles sized by pixel ratio and depth.
    Particles,
    /// Flat-colored lines (knot wireframe).
    Wire,
}

impl ShaderKind {
    pub fn sources(self) -> (&'static str, &'static str) {
        match self {
            Self::Dots => (DOTS_VERT, DOTS_FRAG),
            Self::Ribbon => (RIBBON_VERT, RIBBON_FRAG),
            Self::Particles => (PARTICLES_VERT, DOTS_FRAG),
            Self::Wire => (WIRE_VERT, WIRE_FRAG),
        }
    }
}

pub const ATTR_POSITION: u32 = 0;
pub const ATTR_AUX: u32 = 1;

/// Angular rates of the particle drift in `PARTICLES_VERT`, radians/second.
pub const PARTICLE_RATE_X: f32 = 0.5;
pub const PARTICLE_RATE_Y: f32 = 0.4;

const DOTS_VERT: &str = r#"#version 300 es
layout(location = 0) in vec3 aPosition;
uniform mat4 uProjection;
uniform mat4 uView;
uniform mat4 uModel;
uniform float uPointSize;
uniform float uPointScale;
void main() {
    vec4 mv = uView * uModel * vec4(aPosition, 1.0);
    gl_Position = uProjection * mv;
    gl_PointSize = uPointSize * (uPointScale / max(-mv.z, 0.001));
}
"#;

// Radial falloff: 0.95 at the center, 0.35 halfway, 0 at the rim.
const DOTS_FRAG: &str = r#"#version 300 es
precision mediump float;
uniform vec3 uColor;
uniform float uOpacity;
out vec4 fragColor;
void main() {
    float r = length(gl_PointCoord - vec2(0.5)) * 2.0;
    if (r > 1.0) discard;
    float inner = mix(0.95, 0.35, smoothstep(0.0, 0.5, r));
    float a = mix(inner, 0.0, smoothstep(0.5, 1.0, r));
    fragColor = vec4(uColor, a * uOpacity);
}
"#;

// uParams = (amplitude, frequency, phase, speed)
const RIBBON_VERT: &str = r#"#version 300 es
layout(location = 0) in vec3 aPosition;
layout(location = 1) in vec2 aUv;
uniform mat4 uProjection;
uniform mat4 uView;
uniform mat4 uModel;
uniform float uTime;
uniform vec4 uParams;
out vec2 vUv;
void main() {
    vec3 p = aPosition;
    p.y += uParams.x * sin(p.x * uParams.y + uParams.z + 0.35 * uParams.w * uTime);
    vUv = aUv;
    gl_Position = uProjection * uView * uModel * vec4(p, 1.0);
}
"#;

const RIBBON_FRAG: &str = r#"#version 300 es
precision mediump float;
uniform vec3 uColor;
uniform float uOpacity;
in vec2 vUv;
out vec4 fragColor;
void main() {
    float core = 1.0 - abs(vUv.y * 2.0 - 1.0);
    float glow = pow(core, 2.2);
    float fade = smoothstep(0.0, 0.15, vUv.x) * smoothstep(1.0, 0.85, vUv.x);
    fragColor = vec4(uColor * (0.6 + 0.4 * glow), glow * fade * uOpacity);
}
"#;

// aSeed in [0, 1); uParams.x = drift reach.
const PARTICLES_VERT: &str = r#"#version 300 es
layout(location = 0) in vec3 aPosition;
layout(location = 1) in float aSeed;
uniform mat4 uProjection;
uniform mat4 uView;
uniform mat4 uModel;
uniform float uTime;
uniform float uPixelRatio;
uniform float uPointSize;
uniform float uPointScale;
uniform vec4 uParams;
void main() {
    float phase = aSeed * 6.2831853;
    vec3 p = aPosition;
    p.x += sin(uTime * 0.5 + phase) * uParams.x;
    p.y += cos(uTime * 0.4 + phase) * uParams.x;
    vec4 mv = uView * uModel * vec4(p, 1.0);
    gl_Position = uProjection * mv;
    gl_PointSize = uPointSize * uPixelRatio * (uPointScale / max(-mv.z, 0.001));
}
"#;

const WIRE_VERT: &str = r#"#version 300 es
layout(location = 0) in vec3 aPosition;
uniform mat4 uProjection;
uniform mat4 uView;
uniform mat4 uModel;
void main() {
    gl_Position = uProjection * uView * uModel * vec4(aPosition, 1.0);
}
"#;

const WIRE_FRAG: &str = r#"#version 300 es
precision mediump float;
uniform vec3 uColor;
uniform float uOpacity;
out vec4 fragColor;
void main() {
    fragColor = vec4(uColor, uOpacity);
}
"#;
