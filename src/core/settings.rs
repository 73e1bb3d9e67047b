// Settings panel bindings between slider controls and `GlassConfig` fields.

use super::elastic::SliderRange;
use super::glass::GlassConfig;

/// One configuration slider: its range, field accessors and value label.
#[derive(Clone, Copy)]
pub struct SliderBinding {
    /// Element id of the slider track in the host page.
    pub id: &'static str,
    pub label: &'static str,
    pub range: SliderRange,
    pub read: fn(&GlassConfig) -> f32,
    pub write: fn(&mut GlassConfig, f32),
    pub display: fn(f32) -> String,
}

impl SliderBinding {
    /// Copy of `config` with this binding's field set to `value`.
    pub fn apply(&self, config: &GlassConfig, value: f32) -> GlassConfig {
        let mut next = config.clone();
        (self.write)(&mut next, value);
        next
    }

    pub fn value_display(&self, config: &GlassConfig) -> String {
        (self.display)((self.read)(config))
    }
}

impl std::fmt::Debug for SliderBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderBinding")
            .field("id", &self.id)
            .field("range", &self.range)
            .finish()
    }
}

fn whole(v: f32) -> String {
    format!("{}", v.round())
}

pub const BLUR: SliderBinding = SliderBinding {
    id: "slider-blur",
    label: "UI Blur Intensity",
    range: SliderRange {
        min: 0.0,
        max: 64.0,
        step: 1.0,
    },
    read: |c| c.blur_amount,
    write: |c, v| c.blur_amount = v,
    display: |v| format!("{}px", v.round()),
};

pub const BG_OPACITY: SliderBinding = SliderBinding {
    id: "slider-bg-opacity",
    label: "Liquid Overlay Opacity",
    range: SliderRange {
        min: 0.0,
        max: 1.0,
        step: 0.01,
    },
    read: |c| c.bg_opacity,
    write: |c, v| c.bg_opacity = v,
    display: |v| format!("{}%", (v * 100.0).round()),
};

pub const FREQUENCY: SliderBinding = SliderBinding {
    id: "slider-frequency",
    label: "Noise Scale (Frequency)",
    range: SliderRange {
        min: 0.1,
        max: 10.0,
        step: 0.1,
    },
    read: |c| c.frequency,
    write: |c, v| c.frequency = v,
    display: |v| format!("{:.1}", v),
};

pub const DISPLACEMENT: SliderBinding = SliderBinding {
    id: "slider-displacement",
    label: "Viscosity (Displacement)",
    range: SliderRange {
        min: 0.0,
        max: 100.0,
        step: 1.0,
    },
    read: |c| c.displacement_scale,
    write: |c, v| c.displacement_scale = v,
    display: whole,
};

pub const ABERRATION: SliderBinding = SliderBinding {
    id: "slider-aberration",
    label: "Color Bleed (Aberration)",
    range: SliderRange {
        min: 0.0,
        max: 100.0,
        step: 1.0,
    },
    read: |c| c.chromatic_aberration,
    write: |c, v| c.chromatic_aberration = v,
    display: whole,
};

/// Panel order.
pub const SLIDERS: [SliderBinding; 5] = [BLUR, BG_OPACITY, FREQUENCY, DISPLACEMENT, ABERRATION];

/// What the image URL field should show: data URLs are not echoed back.
pub fn image_field_text(config: &GlassConfig) -> &str {
    match config.custom_bg_image.as_deref() {
        Some(s) if s.starts_with("data:") => "",
        Some(s) => s,
        None => "",
    }
}

/// CSS `background-image` value for a user-supplied URL or data URL.
pub fn css_url(reference: &str) -> String {
    let escaped = reference.replace('\\', "\\\\").replace('"', "\\\"");
    format!("url(\"{}\")", escaped)
}
