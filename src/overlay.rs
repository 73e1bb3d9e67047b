use crate::core::debug::{state_dump, TapCounter};
use crate::core::SharedContext;
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub const SETTINGS_PANEL_ID: &str = "settings-panel";
pub const DEBUG_CONSOLE_ID: &str = "debug-console";
const DEBUG_TRIGGER_ID: &str = "debug-trigger";
const DEBUG_OUTPUT_ID: &str = "debug-output";

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = dom::html_element_by_id(document, id) {
        _ = el.class_list().remove_1("hidden");
        // fallback for pages without a `.hidden` rule; other inline styles stay
        _ = el.style().remove_property("display");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = dom::html_element_by_id(document, id) {
        _ = el.class_list().add_1("hidden");
        _ = el.style().set_property("display", "none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    match dom::html_element_by_id(document, id) {
        Some(el) => {
            el.class_list().contains("hidden")
                || el.style().get_property_value("display").ok().as_deref() == Some("none")
        }
        None => true,
    }
}

#[inline]
pub fn toggle(document: &web::Document, id: &str) {
    if is_hidden(document, id) {
        show(document, id);
    } else {
        hide(document, id);
    }
}

// ---------------- Debug console ----------------

pub fn debug_toggle_checkerboard(ctx: &SharedContext) {
    ctx.replace_glass(|c| c.show_checkerboard = !c.show_checkerboard);
    log::info!("[debug] checkerboard={}", ctx.glass().show_checkerboard);
}

pub fn debug_reset(ctx: &SharedContext) {
    ctx.reset_glass();
    log::info!("[debug] configuration reset to defaults");
}

pub fn debug_dump(document: &web::Document, ctx: &SharedContext) {
    let dump = state_dump(&ctx.selection(), &ctx.glass());
    log::info!("[debug] state\n{}", dump);
    if let Some(el) = document.get_element_by_id(DEBUG_OUTPUT_ID) {
        el.set_text_content(Some(&dump));
    }
}

/// Hidden tap trigger plus the console's buttons.
pub fn wire_debug_console(document: &web::Document, ctx: SharedContext) {
    let taps = Rc::new(RefCell::new(TapCounter::default()));
    let epoch = Instant::now();
    let doc = document.clone();
    dom::add_click_listener(document, DEBUG_TRIGGER_ID, move || {
        let fired = taps.borrow_mut().tap(epoch.elapsed().as_secs_f64());
        if fired {
            log::info!("[debug] console opened");
            show(&doc, DEBUG_CONSOLE_ID);
        }
    });

    let c = ctx.clone();
    dom::add_click_listener(document, "debug-checkerboard", move || {
        debug_toggle_checkerboard(&c);
    });
    let c = ctx.clone();
    dom::add_click_listener(document, "debug-reset", move || debug_reset(&c));
    let c = ctx;
    let doc = document.clone();
    dom::add_click_listener(document, "debug-dump", move || debug_dump(&doc, &c));
    let doc = document.clone();
    dom::add_click_listener(document, "debug-close", move || {
        hide(&doc, DEBUG_CONSOLE_ID)
    });
}
