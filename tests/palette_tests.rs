// Host-side tests for theme parsing and color mapping.

#![allow(dead_code)]
mod common;

use common::approx;
use common::engine::error::GlassError;
use common::engine::palette::*;
use common::engine::theme::*;
use glam::Vec3;

fn in_unit(v: Vec3) -> bool {
    v.cmpge(Vec3::ZERO).all() && v.cmple(Vec3::ONE).all()
}

#[test]
fn every_theme_and_mode_yields_unit_colors() {
    for theme in ThemeName::ALL {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let c = colors_for(theme, mode);
            assert!(in_unit(c.c1), "{theme} {mode} c1 {:?}", c.c1);
            assert!(in_unit(c.c2), "{theme} {mode} c2 {:?}", c.c2);
            assert!(in_unit(c.c3), "{theme} {mode} c3 {:?}", c.c3);
        }
    }
}

#[test]
fn unknown_theme_falls_back_to_blue() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(
            colors_for_name("magenta", mode),
            colors_for(ThemeName::Blue, mode)
        );
        assert_eq!(colors_for_name("", mode), colors_for(ThemeName::Blue, mode));
    }
}

#[test]
fn blue_dark_matches_channel_weights() {
    let c = colors_for(ThemeName::Blue, ThemeMode::Dark);
    assert!(approx(c.c1.x, 0.05) && approx(c.c1.y, 0.125) && approx(c.c1.z, 0.4));
    assert_eq!(c.c2, Vec3::new(0.06, 0.07, 0.1));
    assert!(approx(c.c3.x, 0.03) && approx(c.c3.y, 0.075) && approx(c.c3.z, 0.25));
}

#[test]
fn light_mode_uses_near_white_middle() {
    let c = colors_for(ThemeName::Red, ThemeMode::Light);
    assert_eq!(c.c2, Vec3::new(0.94, 0.95, 0.98));
    let d = colors_for(ThemeName::Red, ThemeMode::Dark);
    assert!(c.c2.length() > d.c2.length());
}

#[test]
fn themes_are_distinct() {
    let blue = colors_for(ThemeName::Blue, ThemeMode::Dark);
    let green = colors_for(ThemeName::Green, ThemeMode::Dark);
    assert_ne!(blue.c1, green.c1);
}

#[test]
fn theme_names_round_trip_and_parse_case_insensitively() {
    for theme in ThemeName::ALL {
        assert_eq!(theme.as_str().parse::<ThemeName>(), Ok(theme));
    }
    assert_eq!("  Teal ".parse::<ThemeName>(), Ok(ThemeName::Teal));
    assert_eq!(
        "cyan".parse::<ThemeName>(),
        Err(GlassError::UnknownTheme("cyan".to_string()))
    );
    assert_eq!(ThemeName::parse("cyan"), ThemeName::Blue);
}

#[test]
fn mode_toggles_and_parses() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    assert!("dark".parse::<ThemeMode>().map(|m| m.is_dark()).unwrap_or(false));
    assert!("dusk".parse::<ThemeMode>().is_err());
}

#[test]
fn accent_css_is_rgba() {
    assert_eq!(accent_css(ThemeName::Blue, 1.0), "rgba(51, 128, 255, 1)");
    assert_eq!(accent_css(ThemeName::Blue, 2.0), "rgba(51, 128, 255, 1)");
    assert_eq!(accent_css(ThemeName::Blue, 0.5), "rgba(51, 128, 255, 0.5)");
}
