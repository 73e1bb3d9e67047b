// Host-side tests for the debug trigger, the state dump and the slider bindings.

#![allow(dead_code)]
mod common;

use common::engine::debug::*;
use common::engine::glass::GlassConfig;
use common::engine::settings::*;
use common::engine::theme::{ThemeMode, ThemeName, ThemeSelection};

#[test]
fn seven_quick_taps_open_the_console() {
    let mut taps = TapCounter::default();
    let fired: Vec<bool> = (0..7).map(|i| taps.tap(i as f64 * 0.4)).collect();
    assert_eq!(fired, vec![false, false, false, false, false, false, true]);
    assert_eq!(taps.count(), 0);
}

#[test]
fn slow_tap_restarts_the_sequence() {
    let mut taps = TapCounter::default();
    for i in 0..5 {
        taps.tap(i as f64);
    }
    assert_eq!(taps.count(), 5);
    assert!(!taps.tap(4.0 + 3.5));
    assert_eq!(taps.count(), 1);
}

#[test]
fn gap_equal_to_window_continues() {
    let mut taps = TapCounter::new(3, 3.0);
    assert!(!taps.tap(0.0));
    assert!(!taps.tap(3.0));
    assert!(taps.tap(6.0));
}

#[test]
fn counter_rearms_after_firing() {
    let mut taps = TapCounter::new(2, 1.0);
    assert!(!taps.tap(0.0));
    assert!(taps.tap(0.1));
    assert!(!taps.tap(0.2));
    assert!(taps.tap(0.3));
}

#[test]
fn dump_lists_selection_and_config() {
    let selection = ThemeSelection {
        theme: ThemeName::Teal,
        mode: ThemeMode::Dark,
    };
    let dump = state_dump(&selection, &GlassConfig::default());
    assert!(dump.starts_with("theme: teal\nmode: dark\n"), "{dump}");
    assert!(dump.contains("refraction: prominent"));
    assert!(dump.contains("blur: 6px"));
    assert!(dump.contains("custom_bg: false (none)"));
    assert!(dump.ends_with("checkerboard: false"));
}

#[test]
fn dump_summarizes_data_urls() {
    let url = format!("data:image/png;base64,{}", "A".repeat(100));
    let config = GlassConfig {
        custom_bg_image: Some(url.clone()),
        use_custom_bg: true,
        ..GlassConfig::default()
    };
    let dump = state_dump(&ThemeSelection::default(), &config);
    assert!(dump.contains(&format!("custom_bg: true (<data url, {} bytes>)", url.len())));
    assert!(!dump.contains("AAAA"));
}

#[test]
fn slider_labels_format_values() {
    assert_eq!((BLUR.display)(6.0), "6px");
    assert_eq!((BG_OPACITY.display)(0.6), "60%");
    assert_eq!((FREQUENCY.display)(2.5), "2.5");
    assert_eq!((DISPLACEMENT.display)(45.0), "45");
    assert_eq!(ABERRATION.value_display(&GlassConfig::default()), "20");
}

#[test]
fn bindings_write_their_own_field_on_a_copy() {
    let original = GlassConfig::default();
    let next = FREQUENCY.apply(&original, 4.2);
    assert_eq!(next.frequency, 4.2);
    assert_eq!(original.frequency, 2.5);
    assert_eq!(
        GlassConfig {
            frequency: 2.5,
            ..next
        },
        original
    );
}

#[test]
fn bindings_read_back_what_they_write() {
    let base = GlassConfig::default();
    for binding in SLIDERS {
        let v = binding.range.snap(binding.range.max * 0.5);
        let next = binding.apply(&base, v);
        assert_eq!((binding.read)(&next), v, "{}", binding.id);
    }
}

#[test]
fn binding_ids_are_unique() {
    let mut ids: Vec<&str> = SLIDERS.iter().map(|b| b.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), SLIDERS.len());
}

#[test]
fn defaults_sit_inside_slider_ranges() {
    let config = GlassConfig::default();
    for binding in SLIDERS {
        let v = (binding.read)(&config);
        assert!(
            v >= binding.range.min && v <= binding.range.max,
            "{} = {v}",
            binding.id
        );
    }
}

#[test]
fn url_field_hides_data_urls() {
    let mut config = GlassConfig::default();
    assert_eq!(image_field_text(&config), "");
    config.custom_bg_image = Some("https://example.com/a.png".to_string());
    assert_eq!(image_field_text(&config), "https://example.com/a.png");
    config.custom_bg_image = Some("data:image/png;base64,AAAA".to_string());
    assert_eq!(image_field_text(&config), "");
}

#[test]
fn css_url_quotes_and_escapes() {
    assert_eq!(css_url("https://x.test/a.png"), "url(\"https://x.test/a.png\")");
    assert_eq!(css_url("a\"b\\c"), "url(\"a\\\"b\\\\c\")");
}
