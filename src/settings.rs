use crate::controls::{SliderControl, SliderSpec, ToggleControl};
use crate::core::settings::{image_field_text, SliderBinding, SLIDERS};
use crate::core::{accent_css, SharedContext, ThemeMode, ThemeName};
use crate::dom;
use crate::overlay;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const DARK_TOGGLE_ID: &str = "toggle-dark-mode";
const CUSTOM_BG_TOGGLE_ID: &str = "toggle-custom-bg";
const CUSTOM_BG_SECTION_ID: &str = "custom-bg-section";
const CUSTOM_BG_URL_ID: &str = "custom-bg-url";
const CUSTOM_BG_FILE_ID: &str = "custom-bg-file";
const CUSTOM_BG_CLEAR_ID: &str = "custom-bg-clear";
const SWATCHES_ID: &str = "theme-swatches";

/// Everything the settings panel drives. Built once at startup.
pub struct SettingsPanel {
    ctx: SharedContext,
    document: web::Document,
    dark_toggle: Option<ToggleControl>,
    custom_bg_toggle: Option<ToggleControl>,
    sliders: Vec<(SliderBinding, SliderControl)>,
    swatches: Vec<(ThemeName, web::HtmlElement)>,
}

impl SettingsPanel {
    pub fn mount(ctx: SharedContext, document: &web::Document) -> Rc<SettingsPanel> {
        let dark_toggle = mount_dark_toggle(&ctx, document);
        let custom_bg_toggle = mount_custom_bg_toggle(&ctx, document);
        let sliders = SLIDERS
            .iter()
            .filter_map(|binding| mount_slider(&ctx, document, *binding))
            .collect::<Vec<_>>();
        let swatches = mount_swatches(&ctx, document);
        wire_image_field(&ctx, document);
        wire_image_file(&ctx, document);
        let c = ctx.clone();
        dom::add_click_listener(document, CUSTOM_BG_CLEAR_ID, move || {
            c.replace_glass(|cfg| cfg.custom_bg_image = None);
            log::info!("[settings] custom image cleared");
        });
        let doc = document.clone();
        dom::add_click_listener(document, "settings-open", move || {
            overlay::toggle(&doc, overlay::SETTINGS_PANEL_ID)
        });
        let doc = document.clone();
        dom::add_click_listener(document, "settings-close", move || {
            overlay::hide(&doc, overlay::SETTINGS_PANEL_ID)
        });

        log::info!(
            "[settings] panel mounted: {} sliders, {} swatches",
            sliders.len(),
            swatches.len()
        );
        let panel = Rc::new(SettingsPanel {
            ctx: ctx.clone(),
            document: document.clone(),
            dark_toggle,
            custom_bg_toggle,
            sliders,
            swatches,
        });
        panel.refresh();
        ctx.follow(&panel, SettingsPanel::refresh);
        panel
    }

    /// Bring every control in line with the current context.
    pub fn refresh(&self) {
        let config = self.ctx.glass();
        let mode = self.ctx.mode();
        let theme = self.ctx.theme();

        dom::apply_mode_class(&self.document, mode);
        dom::apply_glass_blur(&self.document, config.blur_amount);
        if let Some(t) = &self.dark_toggle {
            t.set_checked(mode.is_dark());
        }
        if let Some(t) = &self.custom_bg_toggle {
            t.set_checked(config.use_custom_bg);
        }
        for (binding, slider) in &self.sliders {
            slider.set_value((binding.read)(&config));
        }
        for (name, el) in &self.swatches {
            dom::set_class(el, "is-selected", *name == theme);
        }
        if config.use_custom_bg {
            overlay::show(&self.document, CUSTOM_BG_SECTION_ID);
        } else {
            overlay::hide(&self.document, CUSTOM_BG_SECTION_ID);
        }
        if let Some(input) = url_input(&self.document) {
            let focused = self
                .document
                .active_element()
                .map(|active| active.id() == CUSTOM_BG_URL_ID)
                .unwrap_or(false);
            if !focused {
                input.set_value(image_field_text(&config));
            }
        }
    }
}

fn mount_dark_toggle(ctx: &SharedContext, document: &web::Document) -> Option<ToggleControl> {
    let track = dom::html_element_by_id(document, DARK_TOGGLE_ID)?;
    let c = ctx.clone();
    ToggleControl::mount(
        ctx.clone(),
        document,
        track,
        ctx.mode().is_dark(),
        Box::new(move |dark| {
            let mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
            log::info!("[settings] mode -> {}", mode);
            c.set_mode(mode);
        }),
    )
}

fn mount_custom_bg_toggle(ctx: &SharedContext, document: &web::Document) -> Option<ToggleControl> {
    let track = dom::html_element_by_id(document, CUSTOM_BG_TOGGLE_ID)?;
    let c = ctx.clone();
    ToggleControl::mount(
        ctx.clone(),
        document,
        track,
        ctx.glass().use_custom_bg,
        Box::new(move |on| c.replace_glass(|cfg| cfg.use_custom_bg = on)),
    )
}

fn mount_slider(
    ctx: &SharedContext,
    document: &web::Document,
    binding: SliderBinding,
) -> Option<(SliderBinding, SliderControl)> {
    let container = dom::html_element_by_id(document, binding.id)?;
    let c = ctx.clone();
    let control = SliderControl::mount(
        ctx.clone(),
        document,
        &container,
        SliderSpec {
            label: binding.label.to_string(),
            range: binding.range,
            value: (binding.read)(&ctx.glass()),
            display: Box::new(binding.display),
        },
        Box::new(move |v| c.set_glass(binding.apply(&c.glass(), v))),
    )?;
    Some((binding, control))
}

fn mount_swatches(
    ctx: &SharedContext,
    document: &web::Document,
) -> Vec<(ThemeName, web::HtmlElement)> {
    let Some(container) = dom::html_element_by_id(document, SWATCHES_ID) else {
        return Vec::new();
    };
    let mut swatches = Vec::with_capacity(ThemeName::ALL.len());
    for name in ThemeName::ALL {
        let Some(button) = dom::create_element(document, "button", "theme-swatch") else {
            continue;
        };
        let color = accent_css(name, 1.0);
        button.set_title(name.as_str());
        _ = button.set_attribute("data-theme", name.as_str());
        _ = button.set_attribute("aria-label", name.as_str());
        dom::set_styles(
            &button,
            &[
                ("background", color.as_str()),
                ("width", "24px"),
                ("height", "24px"),
                ("border-radius", "9999px"),
            ],
        );
        let c = ctx.clone();
        let closure = Closure::wrap(Box::new(move || {
            log::info!("[settings] theme -> {}", name);
            c.set_theme(name);
        }) as Box<dyn FnMut()>);
        _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        _ = container.append_child(&button);
        swatches.push((name, button));
    }
    swatches
}

fn url_input(document: &web::Document) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(CUSTOM_BG_URL_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

fn wire_image_field(ctx: &SharedContext, document: &web::Document) {
    let Some(input) = url_input(document) else {
        return;
    };
    let c = ctx.clone();
    let field = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        let text = field.value().trim().to_string();
        c.replace_glass(|cfg| {
            cfg.custom_bg_image = if text.is_empty() { None } else { Some(text) };
        });
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Local image files are inlined as data URLs.
fn wire_image_file(ctx: &SharedContext, document: &web::Document) {
    let Some(input) = document
        .get_element_by_id(CUSTOM_BG_FILE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    let c = ctx.clone();
    let field = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(file) = field.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Ok(reader) = web::FileReader::new() else {
            log::warn!("[settings] FileReader unavailable");
            return;
        };
        let c = c.clone();
        let r = reader.clone();
        let onload = Closure::once(move || {
            if let Some(data) = r.result().ok().and_then(|v| v.as_string()) {
                log::info!("[settings] custom image loaded ({} bytes)", data.len());
                c.replace_glass(|cfg| {
                    cfg.custom_bg_image = Some(data);
                    cfg.use_custom_bg = true;
                });
            }
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        if let Err(e) = reader.read_as_data_url(&file) {
            log::warn!("[settings] could not read image: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
