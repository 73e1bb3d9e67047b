// Theme identifiers and the light/dark display mode.

use super::error::GlassError;
use std::fmt;
use std::str::FromStr;

/// One of the ten accent hues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeName {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Pink,
    Teal,
    Yellow,
    Indigo,
    Gray,
}

impl ThemeName {
    /// Swatch order used by the settings panel.
    pub const ALL: [ThemeName; 10] = [
        ThemeName::Blue,
        ThemeName::Green,
        ThemeName::Purple,
        ThemeName::Orange,
        ThemeName::Red,
        ThemeName::Pink,
        ThemeName::Teal,
        ThemeName::Yellow,
        ThemeName::Indigo,
        ThemeName::Gray,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Blue => "blue",
            ThemeName::Green => "green",
            ThemeName::Purple => "purple",
            ThemeName::Orange => "orange",
            ThemeName::Red => "red",
            ThemeName::Pink => "pink",
            ThemeName::Teal => "teal",
            ThemeName::Yellow => "yellow",
            ThemeName::Indigo => "indigo",
            ThemeName::Gray => "gray",
        }
    }

    /// Lenient lookup: unknown names resolve to the default hue.
    pub fn parse(name: &str) -> ThemeName {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for ThemeName {
    type Err = GlassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GlassError::UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = GlassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            m if m.eq_ignore_ascii_case("light") => Ok(ThemeMode::Light),
            m if m.eq_ignore_ascii_case("dark") => Ok(ThemeMode::Dark),
            other => Err(GlassError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pair that drives color lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSelection {
    pub theme: ThemeName,
    pub mode: ThemeMode,
}
