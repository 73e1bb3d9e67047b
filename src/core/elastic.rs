// Viscous ("honey") deformation for pointer-dragged controls.
//
// Each control owns a two-state gesture machine, `Idle -> Dragging -> Idle`.
// A `DragState` exists only while dragging: it is created on pointer-down,
// updated on pointer-move and consumed on pointer-up, where its final offset
// commits the control's logical value. Nothing here touches the DOM; the web
// layer feeds pointer samples in and applies the resulting `ElasticStyle`.

use super::constants::*;
use glam::Vec2;

/// Tunable gains for the deformation. Defaults are the shipped look.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElasticTuning {
    pub stretch_strength: f32,
    pub toggle_deform_gain: f32,
    pub toggle_drag_expansion: f32,
    pub toggle_squish: Vec2,
    pub slider_drag_expansion: f32,
    pub slider_velocity_gain: f32,
    pub slider_squeeze_ratio: f32,
    pub velocity_limit: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub settle: Transition,
    pub easing: CubicBezier,
}

impl Default for ElasticTuning {
    fn default() -> Self {
        Self {
            stretch_strength: STRETCH_STRENGTH,
            toggle_deform_gain: TOGGLE_DEFORM_GAIN,
            toggle_drag_expansion: TOGGLE_DRAG_EXPANSION,
            toggle_squish: Vec2::new(TOGGLE_SQUISH_X, TOGGLE_SQUISH_Y),
            slider_drag_expansion: SLIDER_DRAG_EXPANSION,
            slider_velocity_gain: SLIDER_VELOCITY_GAIN,
            slider_squeeze_ratio: SLIDER_SQUEEZE_RATIO,
            velocity_limit: SLIDER_VELOCITY_LIMIT,
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
            settle: Transition {
                offset_sec: SETTLE_TRANSLATE_SEC,
                scale_sec: SETTLE_SCALE_SEC,
            },
            easing: CubicBezier::HONEY,
        }
    }
}

impl ElasticTuning {
    fn clamp_scale(&self, s: Vec2) -> Vec2 {
        s.clamp(Vec2::splat(self.scale_min), Vec2::splat(self.scale_max))
    }
}

/// CSS-style cubic Bézier timing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const HONEY: CubicBezier = CubicBezier {
        x1: HONEY_BEZIER[0],
        y1: HONEY_BEZIER[1],
        x2: HONEY_BEZIER[2],
        y2: HONEY_BEZIER[3],
    };

    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Transition durations for the offset and the scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub offset_sec: f32,
    pub scale_sec: f32,
}

impl Transition {
    pub const IMMEDIATE: Transition = Transition {
        offset_sec: 0.0,
        scale_sec: 0.0,
    };
}

/// Client-space rectangle of a control's track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Transient per-gesture state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    /// Thumb offset along the track (px for the toggle, percent for the slider).
    pub primary_axis_offset: f32,
    /// Pointer excursion past the travel limits; drives stretch only.
    pub overflow_pull_x: f32,
    pub overflow_pull_y: f32,
    pub last_pointer_x: f32,
    /// Clamped per-sample horizontal pointer delta.
    pub velocity: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging(DragState),
}

impl Gesture {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging(_))
    }

    pub fn drag(&self) -> Option<&DragState> {
        match self {
            Gesture::Dragging(d) => Some(d),
            Gesture::Idle => None,
        }
    }
}

/// Owner of a control's gesture: the first pointer to press. Presses from
/// other pointers and their events are ignored until it is released.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerGate {
    active: Option<i32>,
}

impl PointerGate {
    pub fn active(&self) -> Option<i32> {
        self.active
    }

    /// Claim the gate for `pointer_id`; false while another pointer owns it.
    pub fn press(&mut self, pointer_id: i32) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(pointer_id);
        true
    }

    pub fn accepts(&self, pointer_id: i32) -> bool {
        self.active == Some(pointer_id)
    }

    /// End the owner's gesture; false for any other pointer.
    pub fn release(&mut self, pointer_id: i32) -> bool {
        if !self.accepts(pointer_id) {
            return false;
        }
        self.active = None;
        true
    }
}

/// Styling hints for one control at one moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElasticStyle {
    /// Thumb offset: px for the toggle, percent of track for the slider.
    pub offset: f32,
    pub scale: Vec2,
    pub dragging: bool,
    pub transition: Transition,
    pub easing: CubicBezier,
}

impl ElasticStyle {
    /// CSS `transition` value; `offset_property` is the property carrying the offset.
    pub fn transition_css(&self, offset_property: &str) -> String {
        let ease = self.easing.css();
        let part = |prop: &str, secs: f32| {
            if secs <= 0.0 {
                format!("{prop} 0s")
            } else {
                format!("{prop} {secs}s {ease}")
            }
        };
        format!(
            "{}, {}, background 0.3s ease, backdrop-filter 0.3s ease",
            part(offset_property, self.transition.offset_sec),
            part("scale", self.transition.scale_sec)
        )
    }

    pub fn scale_css(&self) -> String {
        format!("{} {}", self.scale.x, self.scale.y)
    }
}

// ---------------- Toggle ----------------

/// Toggle track and thumb sizes in CSS px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToggleGeometry {
    pub track_w: f32,
    pub track_h: f32,
    pub thumb_w: f32,
    pub thumb_h: f32,
    pub margin: f32,
}

impl Default for ToggleGeometry {
    fn default() -> Self {
        Self {
            track_w: TOGGLE_TRACK_W,
            track_h: TOGGLE_TRACK_H,
            thumb_w: TOGGLE_THUMB_W,
            thumb_h: TOGGLE_THUMB_H,
            margin: TOGGLE_MARGIN,
        }
    }
}

impl ToggleGeometry {
    /// Maximum thumb travel.
    pub fn max_travel(&self) -> f32 {
        (self.track_w - self.thumb_w - self.margin).max(0.0)
    }
}

#[derive(Clone, Debug)]
pub struct ElasticToggle {
    checked: bool,
    geometry: ToggleGeometry,
    tuning: ElasticTuning,
    gesture: Gesture,
}

impl ElasticToggle {
    pub fn new(checked: bool) -> Self {
        Self::with_geometry(checked, ToggleGeometry::default(), ElasticTuning::default())
    }

    pub fn with_geometry(checked: bool, geometry: ToggleGeometry, tuning: ElasticTuning) -> Self {
        Self {
            checked,
            geometry,
            tuning,
            gesture: Gesture::Idle,
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Sync from the owner's state (e.g. the mode changed elsewhere).
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn geometry(&self) -> &ToggleGeometry {
        &self.geometry
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Start a gesture. Returns false (and changes nothing) if one is active.
    pub fn pointer_down(&mut self, pointer: Vec2, track: TrackRect) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.gesture = Gesture::Dragging(self.sample(pointer, track));
        true
    }

    pub fn pointer_move(&mut self, pointer: Vec2, track: TrackRect) {
        if self.is_dragging() {
            self.gesture = Gesture::Dragging(self.sample(pointer, track));
        }
    }

    /// End the gesture. Returns the new value when it differs from the old one.
    pub fn pointer_up(&mut self) -> Option<bool> {
        let drag = match std::mem::take(&mut self.gesture) {
            Gesture::Dragging(d) => d,
            Gesture::Idle => return None,
        };
        let committed = drag.primary_axis_offset > self.threshold();
        if committed == self.checked {
            return None;
        }
        self.checked = committed;
        log::info!("[toggle] commit {}", committed);
        Some(committed)
    }

    /// Drop the gesture without committing (capture lost, pointer cancelled).
    pub fn cancel(&mut self) {
        self.gesture = Gesture::Idle;
    }

    fn threshold(&self) -> f32 {
        self.geometry.max_travel() / 2.0
    }

    fn sample(&self, pointer: Vec2, track: TrackRect) -> DragState {
        let max_x = self.geometry.max_travel();
        let rel_x = pointer.x - track.left - self.geometry.thumb_w / 2.0;
        let rel_y = pointer.y - (track.top + track.height / 2.0);
        let overflow_x = if rel_x < 0.0 {
            rel_x
        } else if rel_x > max_x {
            rel_x - max_x
        } else {
            0.0
        };
        DragState {
            primary_axis_offset: rel_x.clamp(0.0, max_x),
            overflow_pull_x: overflow_x,
            overflow_pull_y: rel_y,
            last_pointer_x: pointer.x,
            velocity: 0.0,
        }
    }

    /// Whether the track shows as "on" right now (live while dragging).
    pub fn is_activated(&self) -> bool {
        match self.gesture.drag() {
            Some(d) => d.primary_axis_offset > self.threshold(),
            None => self.checked,
        }
    }

    pub fn offset(&self) -> f32 {
        match self.gesture.drag() {
            Some(d) => d.primary_axis_offset,
            None if self.checked => self.geometry.max_travel(),
            None => 0.0,
        }
    }

    pub fn scale(&self) -> Vec2 {
        let Some(d) = self.gesture.drag() else {
            return Vec2::ONE;
        };
        let t = &self.tuning;
        let base = Vec2::splat(t.toggle_drag_expansion) * t.toggle_squish;
        let dx = d.overflow_pull_x * t.stretch_strength;
        let dy = d.overflow_pull_y * t.stretch_strength;
        let deformation = (dx.abs() - dy.abs()) * t.toggle_deform_gain;
        t.clamp_scale(base + Vec2::new(deformation, -deformation))
    }

    pub fn style(&self) -> ElasticStyle {
        let dragging = self.is_dragging();
        ElasticStyle {
            offset: self.offset(),
            scale: self.scale(),
            dragging,
            transition: if dragging {
                Transition::IMMEDIATE
            } else {
                self.tuning.settle
            },
            easing: self.tuning.easing,
        }
    }
}

// ---------------- Slider ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderRange {
    pub fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Round to the nearest step (halves round up), then clamp to the range.
    pub fn snap(&self, raw: f32) -> f32 {
        let stepped = if self.step > 0.0 {
            (raw / self.step + 0.5).floor() * self.step
        } else {
            raw
        };
        stepped.max(self.min).min(self.max)
    }

    /// True when `a` and `b` land on the same step. Rounding in `snap` can
    /// leave a step's value a few ulps off the caller's literal.
    pub fn same_step(&self, a: f32, b: f32) -> bool {
        if self.step > 0.0 {
            (a - b).abs() < self.step * 0.5
        } else {
            a == b
        }
    }

    /// Position of `value` along the track, in percent.
    pub fn percentage(&self, value: f32) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span) * 100.0
    }
}

#[derive(Clone, Debug)]
pub struct ElasticSlider {
    range: SliderRange,
    value: f32,
    tuning: ElasticTuning,
    gesture: Gesture,
}

impl ElasticSlider {
    pub fn new(range: SliderRange, value: f32) -> Self {
        Self::with_tuning(range, value, ElasticTuning::default())
    }

    pub fn with_tuning(range: SliderRange, value: f32, tuning: ElasticTuning) -> Self {
        Self {
            range,
            value,
            tuning,
            gesture: Gesture::Idle,
        }
    }

    pub fn range(&self) -> SliderRange {
        self.range
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sync from the owner's state.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Start a gesture; returns a changed value if the press itself moved it.
    /// A press while already dragging is ignored.
    pub fn pointer_down(&mut self, x: f32, track: TrackRect) -> Option<f32> {
        if self.is_dragging() {
            return None;
        }
        self.gesture = Gesture::Dragging(DragState {
            primary_axis_offset: self.range.percentage(self.value),
            last_pointer_x: x,
            ..DragState::default()
        });
        self.sample(x, track, false)
    }

    pub fn pointer_move(&mut self, x: f32, track: TrackRect) -> Option<f32> {
        if !self.is_dragging() {
            return None;
        }
        self.sample(x, track, false)
    }

    pub fn pointer_up(&mut self, x: f32, track: TrackRect) -> Option<f32> {
        if !self.is_dragging() {
            return None;
        }
        let changed = self.sample(x, track, true);
        self.gesture = Gesture::Idle;
        changed
    }

    pub fn cancel(&mut self) {
        self.gesture = Gesture::Idle;
    }

    fn sample(&mut self, x: f32, track: TrackRect, ending: bool) -> Option<f32> {
        let Gesture::Dragging(drag) = &mut self.gesture else {
            return None;
        };
        if track.width <= 0.0 {
            return None;
        }
        let clamped = (x - track.left).clamp(0.0, track.width);
        let fraction = clamped / track.width;
        let limit = self.tuning.velocity_limit;

        drag.primary_axis_offset = fraction * 100.0;
        drag.velocity = if ending {
            0.0
        } else {
            (x - drag.last_pointer_x).clamp(-limit, limit)
        };
        drag.last_pointer_x = x;

        let raw = self.range.min + fraction * (self.range.max - self.range.min);
        let snapped = self.range.snap(raw);
        if self.range.same_step(snapped, self.value) {
            return None;
        }
        self.value = snapped;
        Some(snapped)
    }

    /// Thumb position in percent: follows the pointer while dragging.
    pub fn percentage(&self) -> f32 {
        match self.gesture.drag() {
            Some(d) => d.primary_axis_offset,
            None => self.range.percentage(self.value),
        }
    }

    pub fn scale(&self) -> Vec2 {
        let Some(d) = self.gesture.drag() else {
            return Vec2::ONE;
        };
        let t = &self.tuning;
        let stretch = d.velocity.abs() * t.slider_velocity_gain;
        let base = t.slider_drag_expansion;
        t.clamp_scale(Vec2::new(
            base + stretch,
            base - stretch * t.slider_squeeze_ratio,
        ))
    }

    pub fn style(&self) -> ElasticStyle {
        let dragging = self.is_dragging();
        ElasticStyle {
            offset: self.percentage(),
            scale: self.scale(),
            dragging,
            transition: if dragging {
                Transition::IMMEDIATE
            } else {
                self.tuning.settle
            },
            easing: self.tuning.easing,
        }
    }
}
