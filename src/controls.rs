//! DOM side of the elastic controls: pointer wiring and styling of the
//! toggle and slider thumbs. The gesture logic lives in `core::elastic`.

use crate::core::{
    accent_css, ElasticSlider, ElasticStyle, ElasticToggle, SharedContext, SliderRange,
    Subscription,
};
use crate::dom;
use crate::events::{PointerGesture, PointerWiring};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const TRACK_OFF_BG: &str = "rgba(148, 163, 184, 0.35)";
const THUMB_IDLE_BG: &str = "#ffffff";
const THUMB_DRAG_BG: &str = "rgba(255, 255, 255, 0.22)";
const THUMB_SHADOW: &str = "0 1px 4px rgba(15, 23, 42, 0.35)";

/// Thumb styling shared by both controls; `offset_property` carries the position.
fn apply_thumb_style(
    thumb: &web::HtmlElement,
    style: &ElasticStyle,
    offset_property: &str,
    blur_px: f32,
) {
    let scale = style.scale_css();
    let transition = style.transition_css(offset_property);
    let (bg, filter) = if style.dragging {
        (THUMB_DRAG_BG, dom::blur_css(blur_px))
    } else {
        (THUMB_IDLE_BG, "none".to_string())
    };
    dom::set_styles(
        thumb,
        &[
            ("scale", scale.as_str()),
            ("transition", transition.as_str()),
            ("background", bg),
            ("backdrop-filter", filter.as_str()),
            ("-webkit-backdrop-filter", filter.as_str()),
        ],
    );
    dom::set_class(thumb, "is-dragging", style.dragging);
}

// ---------------- Toggle ----------------

struct ToggleShared {
    ctx: SharedContext,
    track: web::HtmlElement,
    thumb: web::HtmlElement,
    state: RefCell<ElasticToggle>,
    on_change: RefCell<Box<dyn FnMut(bool)>>,
}

impl ToggleShared {
    fn render(&self) {
        let state = self.state.borrow();
        let style = state.style();
        let on = state.is_activated();
        let geometry = *state.geometry();
        drop(state);

        let track_bg = if on {
            accent_css(self.ctx.theme(), 0.9)
        } else {
            TRACK_OFF_BG.to_string()
        };
        dom::set_class(&self.track, "is-on", on);
        dom::set_styles(
            &self.track,
            &[
                ("width", format!("{}px", geometry.track_w).as_str()),
                ("height", format!("{}px", geometry.track_h).as_str()),
                ("background", track_bg.as_str()),
            ],
        );
        dom::set_styles(
            &self.thumb,
            &[
                ("width", format!("{}px", geometry.thumb_w).as_str()),
                ("height", format!("{}px", geometry.thumb_h).as_str()),
                ("left", format!("{}px", geometry.margin / 2.0).as_str()),
                ("translate", format!("{}px -50%", style.offset).as_str()),
            ],
        );
        apply_thumb_style(
            &self.thumb,
            &style,
            "translate",
            self.ctx.glass().blur_amount,
        );
    }

    fn commit(&self, value: Option<bool>) {
        self.render();
        if let Some(v) = value {
            (self.on_change.borrow_mut())(v);
        }
    }
}

impl PointerGesture for ToggleShared {
    fn down(&self, ev: &web::PointerEvent) {
        let rect = input::track_rect(&self.track);
        let started = self
            .state
            .borrow_mut()
            .pointer_down(input::pointer_client(ev), rect);
        if started {
            self.render();
        }
    }

    fn moved(&self, ev: &web::PointerEvent) {
        if !self.state.borrow().is_dragging() {
            return;
        }
        let rect = input::track_rect(&self.track);
        self.state
            .borrow_mut()
            .pointer_move(input::pointer_client(ev), rect);
        self.render();
    }

    fn up(&self, _ev: &web::PointerEvent) {
        let committed = self.state.borrow_mut().pointer_up();
        self.commit(committed);
    }

    fn cancel(&self, _ev: &web::PointerEvent) {
        if self.state.borrow().is_dragging() {
            self.state.borrow_mut().cancel();
            self.render();
        }
    }
}

/// A draggable on/off switch mounted on an existing track element.
pub struct ToggleControl {
    shared: Rc<ToggleShared>,
    wiring: PointerWiring,
    subscription: Subscription,
}

impl ToggleControl {
    pub fn mount(
        ctx: SharedContext,
        document: &web::Document,
        track: web::HtmlElement,
        checked: bool,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Option<ToggleControl> {
        let thumb = dom::create_element(document, "div", "liquid-toggle-thumb")?;
        dom::set_styles(
            &thumb,
            &[
                ("position", "absolute"),
                ("top", "50%"),
                ("border-radius", "9999px"),
                ("box-shadow", THUMB_SHADOW),
                ("pointer-events", "none"),
            ],
        );
        _ = track.append_child(&thumb);
        _ = track.class_list().add_1("liquid-toggle");
        dom::set_styles(
            &track,
            &[
                ("position", "relative"),
                ("border-radius", "9999px"),
                ("touch-action", "none"),
                ("cursor", "pointer"),
                ("transition", "background 0.3s ease"),
            ],
        );

        let shared = Rc::new(ToggleShared {
            ctx: ctx.clone(),
            track: track.clone(),
            thumb,
            state: RefCell::new(ElasticToggle::new(checked)),
            on_change: RefCell::new(on_change),
        });
        let wiring = PointerWiring::attach(&track, shared.clone() as Rc<dyn PointerGesture>);
        let subscription = ctx.follow(&shared, ToggleShared::render);
        shared.render();
        Some(ToggleControl {
            shared,
            wiring,
            subscription,
        })
    }

    pub fn checked(&self) -> bool {
        self.shared.state.borrow().checked()
    }

    /// Sync from the owner; a drag in progress keeps its live position.
    pub fn set_checked(&self, checked: bool) {
        self.shared.state.borrow_mut().set_checked(checked);
        self.shared.render();
    }

    pub fn remove(mut self) {
        self.wiring.detach();
        self.shared.ctx.unsubscribe(self.subscription);
        self.shared.thumb.remove();
        _ = self.shared.track.class_list().remove_1("liquid-toggle");
    }
}

// ---------------- Slider ----------------

struct SliderShared {
    ctx: SharedContext,
    root: web::HtmlElement,
    track: web::HtmlElement,
    fill: web::HtmlElement,
    thumb: web::HtmlElement,
    value_label: web::HtmlElement,
    state: RefCell<ElasticSlider>,
    display: RefCell<Box<dyn Fn(f32) -> String>>,
    on_change: RefCell<Box<dyn FnMut(f32)>>,
}

impl SliderShared {
    fn render(&self) {
        let state = self.state.borrow();
        let style = state.style();
        let value = state.value();
        drop(state);

        let pct = format!("{}%", style.offset.clamp(0.0, 100.0));
        let accent = accent_css(self.ctx.theme(), 0.85);
        dom::set_styles(
            &self.fill,
            &[("width", pct.as_str()), ("background", accent.as_str())],
        );
        dom::set_styles(&self.thumb, &[("left", pct.as_str())]);
        // The fill tracks the thumb with the same easing
        let fill_transition = if style.dragging {
            "width 0s".to_string()
        } else {
            format!(
                "width {}s {}",
                style.transition.offset_sec,
                style.easing.css()
            )
        };
        dom::set_styles(&self.fill, &[("transition", fill_transition.as_str())]);
        apply_thumb_style(&self.thumb, &style, "left", self.ctx.glass().blur_amount);
        let text = (self.display.borrow())(value);
        self.value_label.set_text_content(Some(&text));
    }

    fn after_sample(&self, changed: Option<f32>) {
        self.render();
        if let Some(v) = changed {
            log::debug!("[slider] value {}", v);
            (self.on_change.borrow_mut())(v);
        }
    }
}

impl PointerGesture for SliderShared {
    fn down(&self, ev: &web::PointerEvent) {
        let rect = input::track_rect(&self.track);
        let changed = self
            .state
            .borrow_mut()
            .pointer_down(ev.client_x() as f32, rect);
        self.after_sample(changed);
    }

    fn moved(&self, ev: &web::PointerEvent) {
        if !self.state.borrow().is_dragging() {
            return;
        }
        let rect = input::track_rect(&self.track);
        let changed = self
            .state
            .borrow_mut()
            .pointer_move(ev.client_x() as f32, rect);
        self.after_sample(changed);
    }

    fn up(&self, ev: &web::PointerEvent) {
        let rect = input::track_rect(&self.track);
        let changed = self
            .state
            .borrow_mut()
            .pointer_up(ev.client_x() as f32, rect);
        self.after_sample(changed);
    }

    fn cancel(&self, _ev: &web::PointerEvent) {
        if self.state.borrow().is_dragging() {
            self.state.borrow_mut().cancel();
            self.render();
        }
    }
}

/// Labelled slider; builds its own markup inside `container`.
pub struct SliderControl {
    shared: Rc<SliderShared>,
    wiring: PointerWiring,
    subscription: Subscription,
}

pub struct SliderSpec {
    pub label: String,
    pub range: SliderRange,
    pub value: f32,
    pub display: Box<dyn Fn(f32) -> String>,
}

impl SliderControl {
    pub fn mount(
        ctx: SharedContext,
        document: &web::Document,
        container: &web::HtmlElement,
        spec: SliderSpec,
        on_change: Box<dyn FnMut(f32)>,
    ) -> Option<SliderControl> {
        let root = dom::create_element(document, "div", "liquid-slider")?;
        let head = dom::create_element(document, "div", "liquid-slider-head")?;
        let label = dom::create_element(document, "span", "liquid-slider-label")?;
        let value_label = dom::create_element(document, "span", "liquid-slider-value")?;
        let track = dom::create_element(document, "div", "liquid-slider-track")?;
        let bar = dom::create_element(document, "div", "liquid-slider-bar")?;
        let fill = dom::create_element(document, "div", "liquid-slider-fill")?;
        let thumb = dom::create_element(document, "div", "liquid-slider-thumb")?;

        label.set_text_content(Some(&spec.label));
        dom::set_styles(
            &head,
            &[
                ("display", "flex"),
                ("justify-content", "space-between"),
                ("font-size", "12px"),
                ("margin-bottom", "6px"),
            ],
        );
        dom::set_styles(
            &track,
            &[
                ("position", "relative"),
                ("height", "22px"),
                ("touch-action", "none"),
                ("cursor", "pointer"),
            ],
        );
        dom::set_styles(
            &bar,
            &[
                ("position", "absolute"),
                ("left", "0"),
                ("right", "0"),
                ("top", "50%"),
                ("height", "6px"),
                ("translate", "0 -50%"),
                ("border-radius", "9999px"),
                ("overflow", "hidden"),
                ("background", TRACK_OFF_BG),
            ],
        );
        dom::set_styles(&fill, &[("height", "100%"), ("border-radius", "9999px")]);
        dom::set_styles(
            &thumb,
            &[
                ("position", "absolute"),
                ("top", "50%"),
                ("width", "20px"),
                ("height", "20px"),
                ("translate", "-50% -50%"),
                ("border-radius", "9999px"),
                ("box-shadow", THUMB_SHADOW),
                ("pointer-events", "none"),
            ],
        );

        _ = head.append_child(&label);
        _ = head.append_child(&value_label);
        _ = bar.append_child(&fill);
        _ = track.append_child(&bar);
        _ = track.append_child(&thumb);
        _ = root.append_child(&head);
        _ = root.append_child(&track);
        _ = container.append_child(&root);

        let shared = Rc::new(SliderShared {
            ctx: ctx.clone(),
            root,
            track: track.clone(),
            fill,
            thumb,
            value_label,
            state: RefCell::new(ElasticSlider::new(spec.range, spec.value)),
            display: RefCell::new(spec.display),
            on_change: RefCell::new(on_change),
        });
        let wiring = PointerWiring::attach(&track, shared.clone() as Rc<dyn PointerGesture>);
        let subscription = ctx.follow(&shared, SliderShared::render);
        shared.render();
        Some(SliderControl {
            shared,
            wiring,
            subscription,
        })
    }

    pub fn value(&self) -> f32 {
        self.shared.state.borrow().value()
    }

    pub fn set_value(&self, value: f32) {
        self.shared.state.borrow_mut().set_value(value);
        self.shared.render();
    }

    pub fn set_display(&self, display: Box<dyn Fn(f32) -> String>) {
        *self.shared.display.borrow_mut() = display;
        self.shared.render();
    }

    pub fn remove(mut self) {
        self.wiring.detach();
        self.shared.ctx.unsubscribe(self.subscription);
        self.shared.root.remove();
    }
}
