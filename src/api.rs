//! `#[wasm_bindgen]` surface for JavaScript hosts that mount layers and
//! controls themselves instead of using the bundled page wiring.

use crate::controls::{SliderControl, SliderSpec, ToggleControl};
use crate::core::debug::state_dump;
use crate::core::{
    AppContext, GlassConfig, RefractionMode, SharedContext, SliderRange, ThemeMode, ThemeName,
    Variant,
};
use crate::dom;
use crate::frame::{GlassLayer, LayerOpacity};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn document() -> Result<web::Document, JsValue> {
    dom::window_document().ok_or_else(|| JsValue::from_str("no document"))
}

/// Application handle: owns the shared theme/mode/configuration context.
#[wasm_bindgen]
pub struct GlassApp {
    ctx: SharedContext,
}

impl Default for GlassApp {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl GlassApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GlassApp {
        GlassApp {
            ctx: Rc::new(AppContext::default()),
        }
    }

    pub fn theme(&self) -> String {
        self.ctx.theme().as_str().to_string()
    }

    /// Unknown names select the default theme.
    pub fn set_theme(&self, name: &str) {
        let theme = name.parse::<ThemeName>().unwrap_or_else(|e| {
            log::warn!("[glass] {}; using {}", e, ThemeName::default());
            ThemeName::default()
        });
        self.ctx.set_theme(theme);
    }

    pub fn mode(&self) -> String {
        self.ctx.mode().as_str().to_string()
    }

    pub fn set_mode(&self, mode: &str) -> Result<(), JsValue> {
        let mode = mode.parse::<ThemeMode>().map_err(js_err)?;
        self.ctx.set_mode(mode);
        if let Ok(doc) = document() {
            dom::apply_mode_class(&doc, mode);
        }
        Ok(())
    }

    pub fn toggle_mode(&self) {
        let next = self.ctx.mode().toggled();
        self.ctx.set_mode(next);
        if let Ok(doc) = document() {
            dom::apply_mode_class(&doc, next);
        }
    }

    pub fn set_refraction_mode(&self, mode: &str) -> Result<(), JsValue> {
        let mode = mode.parse::<RefractionMode>().map_err(js_err)?;
        self.ctx.replace_glass(|c| c.refraction_mode = mode);
        Ok(())
    }

    pub fn set_frequency(&self, v: f32) {
        self.ctx.replace_glass(|c| c.frequency = v);
    }

    pub fn set_amplitude(&self, v: f32) {
        self.ctx.replace_glass(|c| c.amplitude = v);
    }

    pub fn set_displacement(&self, v: f32) {
        self.ctx.replace_glass(|c| c.displacement_scale = v);
    }

    pub fn set_aberration(&self, v: f32) {
        self.ctx.replace_glass(|c| c.chromatic_aberration = v);
    }

    pub fn set_saturation(&self, v: f32) {
        self.ctx.replace_glass(|c| c.saturation = v);
    }

    pub fn set_blur(&self, px: f32) {
        self.ctx.replace_glass(|c| c.blur_amount = px);
        if let Ok(doc) = document() {
            dom::apply_glass_blur(&doc, px);
        }
    }

    pub fn set_elasticity(&self, v: f32) {
        self.ctx.replace_glass(|c| c.elasticity = v);
    }

    pub fn set_over_light(&self, on: bool) {
        self.ctx.replace_glass(|c| c.over_light = on);
    }

    pub fn set_bg_opacity(&self, v: f32) {
        self.ctx.replace_glass(|c| c.bg_opacity = v);
    }

    pub fn set_use_custom_bg(&self, on: bool) {
        self.ctx.replace_glass(|c| c.use_custom_bg = on);
    }

    pub fn set_custom_bg_image(&self, reference: Option<String>) {
        self.ctx
            .replace_glass(|c| c.custom_bg_image = reference.filter(|s| !s.is_empty()));
    }

    pub fn set_checkerboard(&self, on: bool) {
        self.ctx.replace_glass(|c| c.show_checkerboard = on);
    }

    pub fn reset_glass(&self) {
        self.ctx.set_glass(GlassConfig::default());
    }

    /// Number of configuration replacements so far.
    pub fn revision(&self) -> f64 {
        self.ctx.glass_revision() as f64
    }

    pub fn dump_state(&self) -> String {
        state_dump(&self.ctx.selection(), &self.ctx.glass())
    }

    /// Resolves to a `GlassLayerHandle` once the GPU surface is ready.
    pub fn mount_glass_layer(
        &self,
        canvas: web::HtmlCanvasElement,
        variant: &str,
        opacity: f32,
    ) -> Result<js_sys::Promise, JsValue> {
        let variant = variant.parse::<Variant>().map_err(js_err)?;
        let ctx = self.ctx.clone();
        Ok(wasm_bindgen_futures::future_to_promise(async move {
            let layer =
                GlassLayer::mount(ctx, canvas, variant, LayerOpacity::Fixed(opacity)).await;
            Ok(JsValue::from(GlassLayerHandle { inner: Some(layer) }))
        }))
    }

    /// `on_change` receives the new value when a drag commits a change.
    pub fn mount_toggle(
        &self,
        track: web::HtmlElement,
        checked: bool,
        on_change: js_sys::Function,
    ) -> Result<ToggleHandle, JsValue> {
        let doc = document()?;
        let control = ToggleControl::mount(
            self.ctx.clone(),
            &doc,
            track,
            checked,
            Box::new(move |v| {
                if let Err(e) = on_change.call1(&JsValue::NULL, &JsValue::from_bool(v)) {
                    log::error!("[toggle] on_change threw: {:?}", e);
                }
            }),
        )
        .ok_or_else(|| JsValue::from_str("could not build toggle"))?;
        Ok(ToggleHandle {
            inner: Some(control),
        })
    }

    /// `on_change` receives every snapped value change during a drag.
    #[allow(clippy::too_many_arguments)]
    pub fn mount_slider(
        &self,
        container: web::HtmlElement,
        label: String,
        min: f32,
        max: f32,
        step: f32,
        value: f32,
        on_change: js_sys::Function,
    ) -> Result<SliderHandle, JsValue> {
        let doc = document()?;
        let control = SliderControl::mount(
            self.ctx.clone(),
            &doc,
            &container,
            SliderSpec {
                label,
                range: SliderRange::new(min, max, step),
                value,
                display: Box::new(|v| format!("{}", v)),
            },
            Box::new(move |v| {
                if let Err(e) = on_change.call1(&JsValue::NULL, &JsValue::from_f64(v as f64)) {
                    log::error!("[slider] on_change threw: {:?}", e);
                }
            }),
        )
        .ok_or_else(|| JsValue::from_str("could not build slider"))?;
        Ok(SliderHandle {
            inner: Some(control),
        })
    }
}

#[wasm_bindgen]
pub struct GlassLayerHandle {
    inner: Option<GlassLayer>,
}

#[wasm_bindgen]
impl GlassLayerHandle {
    pub fn variant(&self) -> Option<String> {
        self.inner.as_ref().map(|l| l.variant().as_str().to_string())
    }

    pub fn is_rendering(&self) -> bool {
        self.inner.as_ref().map(|l| l.is_rendering()).unwrap_or(false)
    }

    pub fn set_opacity(&self, opacity: f32) {
        if let Some(l) = &self.inner {
            l.set_opacity(LayerOpacity::Fixed(opacity));
        }
    }

    /// Stop the frame loop and release the GPU resources. Idempotent.
    pub fn remove(&mut self) {
        if let Some(layer) = self.inner.take() {
            layer.remove();
        }
    }
}

#[wasm_bindgen]
pub struct ToggleHandle {
    inner: Option<ToggleControl>,
}

#[wasm_bindgen]
impl ToggleHandle {
    pub fn checked(&self) -> bool {
        self.inner.as_ref().map(|t| t.checked()).unwrap_or(false)
    }

    pub fn set_checked(&self, checked: bool) {
        if let Some(t) = &self.inner {
            t.set_checked(checked);
        }
    }

    pub fn remove(&mut self) {
        if let Some(t) = self.inner.take() {
            t.remove();
        }
    }
}

#[wasm_bindgen]
pub struct SliderHandle {
    inner: Option<SliderControl>,
}

#[wasm_bindgen]
impl SliderHandle {
    pub fn value(&self) -> f32 {
        self.inner.as_ref().map(|s| s.value()).unwrap_or(0.0)
    }

    pub fn set_value(&self, value: f32) {
        if let Some(s) = &self.inner {
            s.set_value(value);
        }
    }

    /// Fixed text for the value label, replacing the numeric default.
    pub fn set_value_display(&self, text: String) {
        if let Some(s) = &self.inner {
            s.set_display(Box::new(move |_| text.clone()));
        }
    }

    pub fn remove(&mut self) {
        if let Some(s) = self.inner.take() {
            s.remove();
        }
    }
}
