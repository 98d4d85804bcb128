//! Application Configuration
//!
//! Storage keys, URL parameter names and timings shared across the app.

use crate::theme::ThemePreference;

/// Local storage key for the theme preference
pub const THEME_KEY: &str = "theme";

/// Local storage key for the persisted entry list
pub const ENTRIES_KEY: &str = "nameShuffle-people";

/// URL query parameter carrying comma-separated names
pub const NAMES_PARAM: &str = "names";

/// Class set on `<html>` while the resolved theme is dark
pub const DARK_CLASS: &str = "dark";

/// Preference used when nothing valid is persisted
pub const DEFAULT_PREFERENCE: ThemePreference = ThemePreference::System;

/// Durations of the shuffle animation, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleTiming {
    /// How long the dice spin before a pick is made
    pub roll_ms: u32,
    /// Pause between the pick and revealing it
    pub reveal_ms: u32,
}

impl Default for ShuffleTiming {
    fn default() -> Self {
        Self {
            roll_ms: 2000,
            reveal_ms: 100,
        }
    }
}

/// App-wide settings provided via context
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub timing: ShuffleTiming,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timing: ShuffleTiming::default(),
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let timing = ShuffleTiming::default();
        assert_eq!(timing.roll_ms, 2000);
        assert_eq!(timing.reveal_ms, 100);
    }

    #[test]
    fn test_interface_constants() {
        assert_eq!(THEME_KEY, "theme");
        assert_eq!(ENTRIES_KEY, "nameShuffle-people");
        assert_eq!(NAMES_PARAM, "names");
        assert_eq!(DEFAULT_PREFERENCE, ThemePreference::System);
    }
}
