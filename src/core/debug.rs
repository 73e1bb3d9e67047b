// Hidden debug-console trigger and state dump formatting.

use super::constants::{DEBUG_TAPS_REQUIRED, DEBUG_TAP_WINDOW_SEC};
use super::glass::GlassConfig;
use super::theme::ThemeSelection;

/// Counts taps; fires once `required` taps arrive with no gap longer than `window_sec`.
#[derive(Clone, Debug)]
pub struct TapCounter {
    required: u32,
    window_sec: f64,
    count: u32,
    last_tap_sec: Option<f64>,
}

impl Default for TapCounter {
    fn default() -> Self {
        Self::new(DEBUG_TAPS_REQUIRED, DEBUG_TAP_WINDOW_SEC)
    }
}

impl TapCounter {
    pub fn new(required: u32, window_sec: f64) -> Self {
        Self {
            required: required.max(1),
            window_sec,
            count: 0,
            last_tap_sec: None,
        }
    }

    /// Register a tap at `now_sec`. Returns true when the sequence completes.
    pub fn tap(&mut self, now_sec: f64) -> bool {
        let expired = self
            .last_tap_sec
            .map(|last| now_sec - last > self.window_sec)
            .unwrap_or(false);
        if expired {
            self.count = 0;
        }
        self.count += 1;
        self.last_tap_sec = Some(now_sec);
        if self.count >= self.required {
            self.count = 0;
            self.last_tap_sec = None;
            return true;
        }
        false
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Multi-line state dump for the debug console.
pub fn state_dump(selection: &ThemeSelection, config: &GlassConfig) -> String {
    let image = match config.custom_bg_image.as_deref() {
        Some(s) if s.starts_with("data:") => format!("<data url, {} bytes>", s.len()),
        Some(s) => s.to_string(),
        None => "none".to_string(),
    };
    format!(
        "theme: {}\nmode: {}\nrefraction: {}\nfrequency: {}\namplitude: {}\ndisplacement: {}\n\
         aberration: {}\nsaturation: {}\nblur: {}px\nelasticity: {}\nover_light: {}\n\
         custom_bg: {} ({})\nbg_opacity: {}\ncheckerboard: {}",
        selection.theme,
        selection.mode,
        config.refraction_mode,
        config.frequency,
        config.amplitude,
        config.displacement_scale,
        config.chromatic_aberration,
        config.saturation,
        config.blur_amount,
        config.elasticity,
        config.over_light,
        config.use_custom_bg,
        image,
        config.bg_opacity,
        config.show_checkerboard,
    )
}
