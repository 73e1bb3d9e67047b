#![cfg(target_arch = "wasm32")]

use liquid_glass_web::GlassApp;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn host_div() -> web_sys::HtmlElement {
    let doc = document();
    let el = doc
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

fn noop() -> js_sys::Function {
    js_sys::Function::new_with_args("v", "")
}

#[wasm_bindgen_test]
fn setters_publish_new_records() {
    let app = GlassApp::new();
    assert_eq!(app.revision(), 0.0);
    app.set_frequency(4.0);
    app.set_over_light(true);
    app.set_checkerboard(true);
    assert_eq!(app.revision(), 3.0);

    let dump = app.dump_state();
    assert!(dump.contains("frequency: 4"));
    assert!(dump.contains("over_light: true"));
    assert!(dump.contains("checkerboard: true"));

    app.reset_glass();
    assert!(app.dump_state().contains("checkerboard: false"));
}

#[wasm_bindgen_test]
fn theme_is_lenient_and_mode_is_strict() {
    let app = GlassApp::new();
    app.set_theme("purple");
    assert_eq!(app.theme(), "purple");
    app.set_theme("chartreuse");
    assert_eq!(app.theme(), "blue");

    assert!(app.set_mode("dusk").is_err());
    assert_eq!(app.mode(), "light");
    app.toggle_mode();
    assert_eq!(app.mode(), "dark");
    assert!(document().document_element().unwrap().class_list().contains("dark"));
    app.set_mode("light").unwrap();
}

#[wasm_bindgen_test]
fn bad_variant_is_rejected_before_mounting() {
    let app = GlassApp::new();
    let canvas = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    assert!(app.mount_glass_layer(canvas, "glossy", 1.0).is_err());
}

#[wasm_bindgen_test]
fn toggle_mounts_follows_owner_and_removes() {
    let app = GlassApp::new();
    let track = host_div();
    let mut toggle = app.mount_toggle(track.clone(), false, noop()).unwrap();
    assert_eq!(track.child_element_count(), 1);
    assert!(track.class_list().contains("liquid-toggle"));
    assert!(!toggle.checked());

    toggle.set_checked(true);
    assert!(toggle.checked());
    assert!(track.class_list().contains("is-on"));

    toggle.remove();
    assert_eq!(track.child_element_count(), 0);
    assert!(!track.class_list().contains("liquid-toggle"));
    // Removal is idempotent
    toggle.remove();
}

#[wasm_bindgen_test]
fn slider_builds_markup_and_removes() {
    let app = GlassApp::new();
    let container = host_div();
    let mut slider = app
        .mount_slider(container.clone(), "Depth".into(), 0.0, 10.0, 1.0, 4.0, noop())
        .unwrap();
    assert_eq!(container.child_element_count(), 1);
    assert_eq!(slider.value(), 4.0);

    let label = container
        .query_selector(".liquid-slider-label")
        .unwrap()
        .unwrap();
    assert_eq!(label.text_content().unwrap_or_default(), "Depth");

    slider.set_value(7.0);
    let value = container
        .query_selector(".liquid-slider-value")
        .unwrap()
        .unwrap();
    assert_eq!(value.text_content().unwrap_or_default(), "7");

    slider.set_value_display("deep".into());
    assert_eq!(value.text_content().unwrap_or_default(), "deep");

    slider.remove();
    assert_eq!(container.child_element_count(), 0);
}
