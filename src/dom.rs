use crate::core::ThemeMode;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Match the canvas backing store to its CSS box. Returns true if it changed.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    let dpr = w.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    if canvas.width() == w_px && canvas.height() == h_px {
        return false;
    }
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    true
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn create_element(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> Option<web::HtmlElement> {
    let el = document.create_element(tag).ok()?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>().ok()
}

/// Set several inline style properties; failures are ignored like the rest of the DOM glue.
pub fn set_styles(el: &web::HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        _ = style.set_property(name, value);
    }
}

pub fn select_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Root `light`/`dark` class so page styling follows the mode.
pub fn apply_mode_class(document: &web::Document, mode: ThemeMode) {
    if let Some(root) = document.document_element() {
        set_class(&root, "dark", mode.is_dark());
        set_class(&root, "light", !mode.is_dark());
    }
}

pub fn blur_css(px: f32) -> String {
    format!("blur({}px)", px.max(0.0).round())
}

/// Frosted-glass blur on every `.glass-surface`.
pub fn apply_glass_blur(document: &web::Document, px: f32) {
    let blur = blur_css(px);
    for el in select_all(document, ".glass-surface") {
        set_styles(
            &el,
            &[
                ("backdrop-filter", blur.as_str()),
                ("-webkit-backdrop-filter", blur.as_str()),
            ],
        );
    }
}
