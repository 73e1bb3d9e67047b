// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

const GLASS_WGSL: &str = include_str!("../shaders/glass.wgsl");

#[test]
#[allow(clippy::assertions_on_constants)]
fn scale_limits_bracket_the_drag_expansion() {
    assert!(SCALE_MIN > 0.0 && SCALE_MIN < 1.0);
    assert!(SCALE_MAX > TOGGLE_DRAG_EXPANSION);
    assert!(SCALE_MAX > SLIDER_DRAG_EXPANSION);
    // A squished toggle thumb still fits the limits at rest
    assert!(TOGGLE_DRAG_EXPANSION * TOGGLE_SQUISH_X <= SCALE_MAX);
    assert!(TOGGLE_DRAG_EXPANSION * TOGGLE_SQUISH_Y >= SCALE_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn toggle_thumb_fits_its_track() {
    assert!(TOGGLE_THUMB_W + TOGGLE_MARGIN < TOGGLE_TRACK_W);
    assert!(TOGGLE_THUMB_H < TOGGLE_TRACK_H);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn settle_and_easing_are_sane() {
    assert!(SETTLE_TRANSLATE_SEC > 0.0 && SETTLE_TRANSLATE_SEC < 2.0);
    assert!(SETTLE_SCALE_SEC > 0.0 && SETTLE_SCALE_SEC < 2.0);
    // CSS requires bezier x control points in [0, 1]
    assert!((0.0..=1.0).contains(&HONEY_BEZIER[0]));
    assert!((0.0..=1.0).contains(&HONEY_BEZIER[2]));
}

#[test]
fn luma_weights_sum_to_one() {
    let sum: f32 = LUMA_WEIGHTS.iter().sum();
    assert!((sum - 1.0).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn backdrop_defaults_are_valid() {
    assert!((0.0..=1.0).contains(&DEFAULT_BACKDROP_OPACITY));
    for hex in [BACKDROP_BASE_DARK, BACKDROP_BASE_LIGHT] {
        assert!(hex.starts_with('#') && hex.len() == 7, "{hex}");
    }
    assert!(DEBUG_TAPS_REQUIRED > 1);
    assert!(DEBUG_TAP_WINDOW_SEC > 0.0);
}

#[test]
fn shader_literals_match_shading_constants() {
    let expect = |needle: String| {
        assert!(GLASS_WGSL.contains(&needle), "glass.wgsl lacks `{needle}`");
    };
    expect(format!("uv * {:.1}", CHECKER_CELLS));
    expect(format!("u.time * {}", TIME_SCALE));
    expect(format!("u.aberration * {}", ABERRATION_SHIFT));
    expect(format!("u.displacement * {}", REFRACTION_SCALE));
    expect(format!("g), {:.1}) * {}", SPECULAR_EXPONENT, SPECULAR_GAIN));
    expect(format!("color * {}", OVER_LIGHT_DARKEN));
    expect(format!(
        "vec3<f32>({}, {}, {})",
        LUMA_WEIGHTS[0], LUMA_WEIGHTS[1], LUMA_WEIGHTS[2]
    ));
}
