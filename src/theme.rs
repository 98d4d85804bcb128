//! Theme Resolution
//!
//! Tri-state theme preference, its resolution against the platform
//! color scheme, and persistence of the user's choice.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PREFERENCE, THEME_KEY};
use crate::storage::{KeyValueStore, SharedStore};

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the platform color scheme
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [Self::Light, Self::Dark, Self::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Parse a stored value; anything unrecognised is `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            "system" => Some(ThemePreference::System),
            _ => None,
        }
    }

    /// Next preference in the toggle cycle: system → light → dark → system
    pub fn next(&self) -> Self {
        match self {
            ThemePreference::System => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
        }
    }

    /// Glyph shown on the toggle while this preference is active
    pub fn icon(&self) -> &'static str {
        match self {
            ThemePreference::Light => "☀️",
            ThemePreference::Dark => "🌙",
            ThemePreference::System => "🖥️",
        }
    }

    /// Accessible label for the toggle, naming the state it switches to
    pub fn switch_label(&self) -> &'static str {
        match self.next() {
            ThemePreference::Light => "Switch to light mode",
            ThemePreference::Dark => "Switch to dark mode",
            ThemePreference::System => "Switch to system mode",
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme actually applied to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn resolve(preference: ThemePreference, system_dark: bool) -> Self {
        match preference {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System if system_dark => ResolvedTheme::Dark,
            ThemePreference::System => ResolvedTheme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ResolvedTheme::Dark)
    }
}

/// Read the persisted preference, `None` when absent, invalid or unreadable
pub fn load_preference(storage: &SharedStore) -> Option<ThemePreference> {
    match storage.get(THEME_KEY) {
        Ok(Some(raw)) => {
            let parsed = ThemePreference::parse(&raw);
            if parsed.is_none() {
                log::warn!("[THEME] ignoring stored theme {:?}", raw);
            }
            parsed
        }
        Ok(None) => None,
        Err(err) => {
            log::warn!("[THEME] could not read preference: {}", err);
            None
        }
    }
}

/// Theme state machine
pub struct ThemeResolver {
    preference: ThemePreference,
    system_dark: bool,
    storage: SharedStore,
}

impl ThemeResolver {
    /// Restore the persisted preference (or the default) against the
    /// platform's current color scheme.
    pub fn load(storage: SharedStore, system_dark: bool) -> Self {
        let preference = load_preference(&storage).unwrap_or(DEFAULT_PREFERENCE);
        log::debug!("[THEME] preference={} system_dark={}", preference, system_dark);
        Self {
            preference,
            system_dark,
            storage,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn resolved(&self) -> ResolvedTheme {
        ResolvedTheme::resolve(self.preference, self.system_dark)
    }

    /// Adopt and persist a preference
    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = preference;
        if let Err(err) = self.storage.set(THEME_KEY, preference.as_str()) {
            log::warn!("[THEME] could not save preference: {}", err);
        }
    }

    /// Advance to the next preference and persist it
    pub fn cycle(&mut self) -> ThemePreference {
        let next = self.preference.next();
        self.set_preference(next);
        next
    }

    /// Record a platform color-scheme change.
    ///
    /// Returns whether the resolved theme changed, which only happens in
    /// `System` mode.
    pub fn set_system_dark(&mut self, system_dark: bool) -> bool {
        let before = self.resolved();
        self.system_dark = system_dark;
        before != self.resolved()
    }
}
