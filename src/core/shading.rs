// Shading-stage contract and its CPU reference.
//
// `GlassUniforms` is the exact uniform block the WGSL fragment shader reads
// (`shaders/glass.wgsl`), and `shade` evaluates the same per-pixel function on
// the CPU. The two are kept line-for-line equivalent so the CPU path can be
// used to check the shader's behaviour on the host.

use super::constants::{
    ABERRATION_SHIFT, CHECKER_CELLS, LUMA_WEIGHTS, OVER_LIGHT_DARKEN, REFRACTION_SCALE,
    SPECULAR_EXPONENT, SPECULAR_GAIN, TIME_SCALE,
};
use super::error::GlassError;
use super::glass::GlassConfig;
use super::noise::noise3;
use super::palette::ColorTriple;
use glam::{Vec2, Vec3, Vec4};
use std::str::FromStr;

/// Which shading program a visual layer runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Slow ambient field for the page backdrop.
    #[default]
    Classic,
    /// Refractive, higher-frequency field for accent surfaces.
    Specy,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Specy => "specy",
        }
    }

    fn index(self) -> u32 {
        match self {
            Variant::Classic => 0,
            Variant::Specy => 1,
        }
    }
}

impl FromStr for Variant {
    type Err = GlassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "classic" => Ok(Variant::Classic),
            "specy" => Ok(Variant::Specy),
            other => Err(GlassError::UnknownVariant(other.to_string())),
        }
    }
}

/// Per-tick inputs that do not come from the configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderFrame {
    /// Seconds since the layer started.
    pub time_seconds: f32,
    pub resolution_px: [u32; 2],
    /// Pointer in surface pixels, origin bottom-left.
    pub pointer_px: [f32; 2],
}

// Layout mirrors `struct Glass` in glass.wgsl (uniform address space rules)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlassUniforms {
    pub resolution: [f32; 2],
    pub pointer: [f32; 2],
    pub time: f32,
    pub frequency: f32,
    pub amplitude: f32,
    pub displacement: f32,
    pub aberration: f32,
    pub saturation: f32,
    pub opacity: f32,
    pub variant: u32,
    pub color1: [f32; 4],
    pub color2: [f32; 4],
    pub color3: [f32; 4],
    pub over_light: u32,
    pub show_checkerboard: u32,
    pub _pad: [u32; 2],
}

impl GlassUniforms {
    pub fn compose(
        frame: &RenderFrame,
        colors: &ColorTriple,
        config: &GlassConfig,
        variant: Variant,
        opacity: f32,
    ) -> Self {
        Self {
            resolution: [frame.resolution_px[0] as f32, frame.resolution_px[1] as f32],
            pointer: frame.pointer_px,
            time: frame.time_seconds,
            frequency: config.frequency,
            amplitude: config.amplitude,
            displacement: config.displacement_scale,
            aberration: config.chromatic_aberration,
            saturation: config.saturation,
            opacity: opacity.clamp(0.0, 1.0),
            variant: variant.index(),
            color1: colors.c1.extend(1.0).to_array(),
            color2: colors.c2.extend(1.0).to_array(),
            color3: colors.c3.extend(1.0).to_array(),
            over_light: config.over_light as u32,
            show_checkerboard: config.show_checkerboard as u32,
            _pad: [0; 2],
        }
    }

    pub fn variant(&self) -> Variant {
        if self.variant == 1 {
            Variant::Specy
        } else {
            Variant::Classic
        }
    }
}

#[inline]
fn mix3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

#[inline]
fn rgb(c: [f32; 4]) -> Vec3 {
    Vec3::new(c[0], c[1], c[2])
}

/// 20x20 black/white calibration pattern.
pub fn checker(uv: Vec2) -> Vec4 {
    let grid = (uv * CHECKER_CELLS).floor();
    let pattern = (grid.x + grid.y).rem_euclid(2.0);
    Vec4::new(pattern, pattern, pattern, 1.0)
}

/// Shade one pixel. `uv` is in `[0, 1]^2`, origin bottom-left.
/// Returns premultiplied RGBA.
pub fn shade(u: &GlassUniforms, uv: Vec2) -> Vec4 {
    if u.show_checkerboard != 0 {
        return checker(uv);
    }

    let t = u.time * TIME_SCALE;
    let amp = u.amplitude * 2.0;
    let (c1, c2, c3) = (rgb(u.color1), rgb(u.color2), rgb(u.color3));
    let mut color = match u.variant() {
        Variant::Specy => {
            let shift = Vec2::new(u.aberration * ABERRATION_SHIFT, 0.0);
            let r = noise3(((uv + shift) * u.frequency).extend(t)) * amp;
            let g = noise3((uv * u.frequency).extend(t)) * amp;
            let b = noise3(((uv - shift) * u.frequency).extend(t)) * amp;

            let refraction = Vec2::new(r - g, b - g) * (u.displacement * REFRACTION_SCALE);
            let refracted = uv + refraction;
            let base = noise3((refracted * u.frequency).extend(t)) * amp;

            let mut c = mix3(c1, c2, base * 0.5 + 0.5);
            c = mix3(c, c3, b * 0.5 + 0.5);
            c + Vec3::splat(g.max(0.0).powf(SPECULAR_EXPONENT) * SPECULAR_GAIN)
        }
        Variant::Classic => {
            let n1 = noise3((uv * (u.frequency * 0.4)).extend(t * 0.5)) * amp;
            let n2 = noise3((uv * (u.frequency * 0.8) + Vec2::splat(t)).extend(t * 0.3)) * amp;
            let c = mix3(c1, c2, n1 * 0.5 + 0.5);
            mix3(c, c3, n2 * 0.4 + 0.3)
        }
    };

    let luma = color.dot(Vec3::from_array(LUMA_WEIGHTS));
    color = mix3(Vec3::splat(luma), color, u.saturation / 100.0);
    if u.over_light != 0 {
        color *= OVER_LIGHT_DARKEN;
    }
    let color = color.clamp(Vec3::ZERO, Vec3::ONE);
    (color * u.opacity).extend(u.opacity)
}

/// Convert a pixel center to the shader's uv convention.
pub fn pixel_uv(x: u32, y: u32, width: u32, height: u32) -> Vec2 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Vec2::new((x as f32 + 0.5) / w, 1.0 - (y as f32 + 0.5) / h)
}
