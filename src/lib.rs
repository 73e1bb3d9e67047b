#![cfg(target_arch = "wasm32")]
use crate::core::{AppContext, SharedContext, Variant};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod api;
mod backdrop;
mod controls;
pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod settings;

pub use api::{GlassApp, GlassLayerHandle, SliderHandle, ToggleHandle};

const BACKDROP_HOST_ID: &str = "glass-backdrop";
const ACCENT_SELECTOR: &str = "[data-glass-variant]";

/// Objects that live as long as the page.
struct PageApp {
    _panel: Rc<settings::SettingsPanel>,
    _backdrop: backdrop::Backdrop,
    _accents: Vec<frame::GlassLayer>,
}

/// Give every `data-glass-variant` element its own layer canvas.
async fn mount_accent_surfaces(
    ctx: &SharedContext,
    document: &web::Document,
) -> anyhow::Result<Vec<frame::GlassLayer>> {
    let mut layers = Vec::new();
    for host in dom::select_all(document, ACCENT_SELECTOR) {
        let raw = host.get_attribute("data-glass-variant").unwrap_or_default();
        let variant = raw.parse::<Variant>().unwrap_or_else(|e| {
            log::warn!("[frame] {}; using classic", e);
            Variant::Classic
        });
        let opacity = host
            .get_attribute("data-glass-opacity")
            .and_then(|s| s.parse::<f32>().ok())
            .unwrap_or(1.0);
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        canvas.set_class_name("accent-glass");
        dom::set_styles(&host, &[("isolation", "isolate")]);
        dom::set_styles(
            &canvas,
            &[
                ("position", "absolute"),
                ("inset", "0"),
                ("width", "100%"),
                ("height", "100%"),
                ("z-index", "-1"),
                ("border-radius", "inherit"),
                ("pointer-events", "none"),
            ],
        );
        host.prepend_with_node_1(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let layer = frame::GlassLayer::mount(
            ctx.clone(),
            canvas,
            variant,
            frame::LayerOpacity::Fixed(opacity),
        )
        .await;
        layers.push(layer);
    }
    Ok(layers)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("liquid-glass-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(host) = dom::html_element_by_id(&document, BACKDROP_HOST_ID) else {
        log::info!("no #{} on this page; waiting for GlassApp calls", BACKDROP_HOST_ID);
        return Ok(());
    };

    let ctx: SharedContext = Rc::new(AppContext::default());
    dom::apply_mode_class(&document, ctx.mode());

    let panel = settings::SettingsPanel::mount(ctx.clone(), &document);
    overlay::wire_debug_console(&document, ctx.clone());
    events::wire_debug_keys(&document, ctx.clone());

    let backdrop = backdrop::Backdrop::mount(ctx.clone(), &document, &host)
        .await
        .ok_or_else(|| anyhow::anyhow!("could not build backdrop"))?;
    let accents = mount_accent_surfaces(&ctx, &document).await?;
    log::info!("page ready: {} accent surfaces", accents.len());

    // Leak the page app so its listeners and frame loops stay alive
    Box::leak(Box::new(PageApp {
        _panel: panel,
        _backdrop: backdrop,
        _accents: accents,
    }));
    Ok(())
}
