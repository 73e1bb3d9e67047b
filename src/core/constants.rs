// Shared tuning constants for the glass renderer and the elastic controls.
//
// Aesthetic values tuned by eye. `ElasticTuning` takes the control values as
// defaults; the shading values are mirrored as literals in glass.wgsl.

// ---------------- Elastic controls ----------------

// Deformation gain applied to the toggle's overflow pull (px -> stretch units)
pub const STRETCH_STRENGTH: f32 = 0.4;
// How much one unit of stretch changes the toggle scale
pub const TOGGLE_DEFORM_GAIN: f32 = 0.06;

// Base expansion while a control is being dragged
pub const TOGGLE_DRAG_EXPANSION: f32 = 1.55;
pub const SLIDER_DRAG_EXPANSION: f32 = 1.6;

// Directional squish of the dragged toggle thumb (wide and flat)
pub const TOGGLE_SQUISH_X: f32 = 1.12;
pub const TOGGLE_SQUISH_Y: f32 = 0.88;

// Slider stretch per px/sample of velocity, and the perpendicular squeeze ratio
pub const SLIDER_VELOCITY_GAIN: f32 = 0.04;
pub const SLIDER_SQUEEZE_RATIO: f32 = 0.45;
pub const SLIDER_VELOCITY_LIMIT: f32 = 30.0; // px per pointer sample

// Safe scale range for any elastic control
pub const SCALE_MIN: f32 = 0.6;
pub const SCALE_MAX: f32 = 2.2;

// Settle transitions after release (seconds)
pub const SETTLE_TRANSLATE_SEC: f32 = 0.5;
pub const SETTLE_SCALE_SEC: f32 = 0.4;

// Honey easing curve: cubic-bezier(x1, y1, x2, y2)
pub const HONEY_BEZIER: [f32; 4] = [0.5, 0.0, 0.2, 1.0];

// Toggle geometry (CSS px)
pub const TOGGLE_TRACK_W: f32 = 52.0;
pub const TOGGLE_TRACK_H: f32 = 26.0;
pub const TOGGLE_THUMB_W: f32 = 29.0;
pub const TOGGLE_THUMB_H: f32 = 18.0;
pub const TOGGLE_MARGIN: f32 = 8.0;

// ---------------- Shading ----------------

// Simplex noise output normalisation
pub const NOISE_NORMALIZATION: f32 = 42.0;

// Global time scale applied before any variant-specific scaling
pub const TIME_SCALE: f32 = 0.2;

// Specy variant
pub const ABERRATION_SHIFT: f32 = 0.02; // uv shift per unit of chromatic aberration
pub const REFRACTION_SCALE: f32 = 0.12; // uv displacement per unit of displacement scale
pub const SPECULAR_EXPONENT: f32 = 16.0;
pub const SPECULAR_GAIN: f32 = 0.6;

// Overlay darkening when `overLight` is set
pub const OVER_LIGHT_DARKEN: f32 = 0.85;

// Diagnostic checkerboard cells per axis
pub const CHECKER_CELLS: f32 = 20.0;

// Rec.601 luma weights
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

// ---------------- Backdrop ----------------

// Visual layer opacity when no custom background image is in use
pub const DEFAULT_BACKDROP_OPACITY: f32 = 0.8;

// Solid base colors under the backdrop (slate-950 / slate-300)
pub const BACKDROP_BASE_DARK: &str = "#020617";
pub const BACKDROP_BASE_LIGHT: &str = "#cbd5e1";

// ---------------- Debug trigger ----------------

pub const DEBUG_TAPS_REQUIRED: u32 = 7;
pub const DEBUG_TAP_WINDOW_SEC: f64 = 3.0;
