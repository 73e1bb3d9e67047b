use crate::core::SharedContext;
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Debug console shortcut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugKey {
    Checkerboard,
    Reset,
    Dump,
    Close,
}

#[inline]
pub fn debug_key(key: &str) -> Option<DebugKey> {
    match key {
        "c" | "C" => Some(DebugKey::Checkerboard),
        "r" | "R" => Some(DebugKey::Reset),
        "d" | "D" => Some(DebugKey::Dump),
        "Escape" => Some(DebugKey::Close),
        _ => None,
    }
}

pub fn handle_debug_keydown(ev: &web::KeyboardEvent, document: &web::Document, ctx: &SharedContext) {
    // Shortcuts only apply while the console is open, and never while typing
    if overlay::is_hidden(document, overlay::DEBUG_CONSOLE_ID) {
        return;
    }
    if ev
        .target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .is_some()
    {
        return;
    }
    let Some(action) = debug_key(&ev.key()) else {
        return;
    };
    match action {
        DebugKey::Checkerboard => overlay::debug_toggle_checkerboard(ctx),
        DebugKey::Reset => overlay::debug_reset(ctx),
        DebugKey::Dump => overlay::debug_dump(document, ctx),
        DebugKey::Close => overlay::hide(document, overlay::DEBUG_CONSOLE_ID),
    }
    log::info!("[keys] debug {:?}", action);
    ev.prevent_default();
}

pub fn wire_debug_keys(document: &web::Document, ctx: SharedContext) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_debug_keydown(&ev, &doc, &ctx);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
