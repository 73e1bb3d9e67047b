// Theme -> base color triple used to blend the noise fields.

use super::theme::{ThemeMode, ThemeName, ThemeSelection};
use glam::Vec3;

/// Three base colors, each component in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTriple {
    pub c1: Vec3,
    pub c2: Vec3,
    pub c3: Vec3,
}

// Neutral middle colors: near-black in dark mode, near-white in light mode
const NEUTRAL_DARK: Vec3 = Vec3::new(0.06, 0.07, 0.1);
const NEUTRAL_LIGHT: Vec3 = Vec3::new(0.94, 0.95, 0.98);

// Per-channel multipliers applied to the base hue (blue channel kept brighter)
const DARK_C1: Vec3 = Vec3::new(0.25, 0.25, 0.4);
const DARK_C3: Vec3 = Vec3::new(0.15, 0.15, 0.25);
const LIGHT_C1: Vec3 = Vec3::new(0.7, 0.7, 0.9);
const LIGHT_C3: Vec3 = Vec3::new(0.5, 0.5, 0.7);

/// Base hue for a theme.
pub fn base_hue(theme: ThemeName) -> Vec3 {
    match theme {
        ThemeName::Blue => Vec3::new(0.2, 0.5, 1.0),
        ThemeName::Green => Vec3::new(0.1, 0.8, 0.4),
        ThemeName::Purple => Vec3::new(0.6, 0.3, 1.0),
        ThemeName::Orange => Vec3::new(1.0, 0.6, 0.1),
        ThemeName::Red => Vec3::new(1.0, 0.2, 0.3),
        ThemeName::Pink => Vec3::new(1.0, 0.3, 0.8),
        ThemeName::Teal => Vec3::new(0.1, 0.7, 0.7),
        ThemeName::Yellow => Vec3::new(1.0, 0.9, 0.1),
        ThemeName::Indigo => Vec3::new(0.4, 0.4, 1.0),
        ThemeName::Gray => Vec3::new(0.6, 0.6, 0.7),
    }
}

pub fn colors_for(theme: ThemeName, mode: ThemeMode) -> ColorTriple {
    let c = base_hue(theme);
    let triple = match mode {
        ThemeMode::Dark => ColorTriple {
            c1: c * DARK_C1,
            c2: NEUTRAL_DARK,
            c3: c * DARK_C3,
        },
        ThemeMode::Light => ColorTriple {
            c1: c * LIGHT_C1,
            c2: NEUTRAL_LIGHT,
            c3: c * LIGHT_C3,
        },
    };
    ColorTriple {
        c1: triple.c1.clamp(Vec3::ZERO, Vec3::ONE),
        c2: triple.c2,
        c3: triple.c3.clamp(Vec3::ZERO, Vec3::ONE),
    }
}

/// Lookup by raw name; unknown names fall back to the default hue.
pub fn colors_for_name(theme: &str, mode: ThemeMode) -> ColorTriple {
    colors_for(ThemeName::parse(theme), mode)
}

impl ThemeSelection {
    pub fn colors(&self) -> ColorTriple {
        colors_for(self.theme, self.mode)
    }
}

/// CSS color for a theme's accent (swatches, active tracks, slider fill).
pub fn accent_css(theme: ThemeName, alpha: f32) -> String {
    let c = (base_hue(theme) * 255.0).round();
    format!(
        "rgba({}, {}, {}, {})",
        c.x as u8,
        c.y as u8,
        c.z as u8,
        alpha.clamp(0.0, 1.0)
    )
}
