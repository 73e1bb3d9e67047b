// The glass configuration record and its copy-on-write slot.
//
// Readers hold an `Rc<GlassConfig>` snapshot; writers publish a complete
// replacement record. A snapshot never changes underneath its holder, so the
// renderer can never observe a half-updated configuration.

use super::constants::DEFAULT_BACKDROP_OPACITY;
use super::error::GlassError;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefractionMode {
    Standard,
    Polar,
    #[default]
    Prominent,
}

impl RefractionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RefractionMode::Standard => "standard",
            RefractionMode::Polar => "polar",
            RefractionMode::Prominent => "prominent",
        }
    }
}

impl FromStr for RefractionMode {
    type Err = GlassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "standard" => Ok(RefractionMode::Standard),
            "polar" => Ok(RefractionMode::Polar),
            "prominent" => Ok(RefractionMode::Prominent),
            other => Err(GlassError::UnknownRefractionMode(other.to_string())),
        }
    }
}

impl fmt::Display for RefractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual tunables shared by the renderer and the settings controls.
///
/// Values are assumed pre-validated by the controls that produce them
/// (slider ranges); nothing here clamps.
#[derive(Clone, Debug, PartialEq)]
pub struct GlassConfig {
    pub refraction_mode: RefractionMode,
    pub displacement_scale: f32,
    pub blur_amount: f32,
    /// Percent, 0..=100.
    pub saturation: f32,
    pub chromatic_aberration: f32,
    pub elasticity: f32,
    pub over_light: bool,
    pub frequency: f32,
    pub amplitude: f32,
    /// URL or data URL of the custom backdrop image.
    pub custom_bg_image: Option<String>,
    pub use_custom_bg: bool,
    /// Visual layer opacity while a custom image is shown, 0..=1.
    pub bg_opacity: f32,
    /// Diagnostic override: render a checker pattern instead of noise.
    pub show_checkerboard: bool,
}

impl Default for GlassConfig {
    fn default() -> Self {
        Self {
            refraction_mode: RefractionMode::Prominent,
            displacement_scale: 45.0,
            blur_amount: 6.0,
            saturation: 100.0,
            chromatic_aberration: 20.0,
            elasticity: 15.0,
            over_light: false,
            frequency: 2.5,
            amplitude: 0.5,
            custom_bg_image: None,
            use_custom_bg: false,
            bg_opacity: 0.6,
            show_checkerboard: false,
        }
    }
}

impl GlassConfig {
    /// Custom image reference, only when the custom backdrop is enabled.
    pub fn active_background_image(&self) -> Option<&str> {
        if !self.use_custom_bg {
            return None;
        }
        self.custom_bg_image.as_deref().filter(|s| !s.is_empty())
    }

    /// Opacity of the backdrop visual layer.
    pub fn backdrop_opacity(&self) -> f32 {
        if self.use_custom_bg {
            self.bg_opacity
        } else {
            DEFAULT_BACKDROP_OPACITY
        }
    }
}

/// Single live slot for the configuration; replacement only.
#[derive(Debug, Default)]
pub struct GlassSlot {
    current: Rc<GlassConfig>,
    revision: u64,
}

impl GlassSlot {
    pub fn new(initial: GlassConfig) -> Self {
        Self {
            current: Rc::new(initial),
            revision: 0,
        }
    }

    /// Shared snapshot of the live record.
    pub fn get(&self) -> Rc<GlassConfig> {
        Rc::clone(&self.current)
    }

    /// Publish `next` as the whole new record.
    pub fn set(&mut self, next: GlassConfig) {
        self.current = Rc::new(next);
        self.revision = self.revision.wrapping_add(1);
    }

    /// Incremented on every `set`.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
