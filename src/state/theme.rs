//! Active theme and its provenance.
//!
//! DESIGN
//! ======
//! `theme` and `source` live in one `Copy` value so every transition replaces
//! both at once. The transitions here are pure; persistence and presentation
//! side effects belong to `util::theme::ThemeReconciler`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

/// Resolved light/dark display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme implied by the OS-level signal.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored string is not exactly `light` or `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme value: {0:?}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Where the active theme came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeSource {
    /// Inferred from the OS color-scheme signal; follows its changes.
    #[default]
    System,
    /// Chosen by the user, now or in an earlier session.
    Explicit,
}

/// The live theme value shared with every consumer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    pub source: ThemeSource,
}

impl ThemeState {
    /// Initial state from the persisted value (if any) and the OS signal.
    ///
    /// A persisted value counts only when it is exactly `light` or `dark`; it
    /// then wins and marks the state explicit.
    pub fn resolve(persisted: Option<&str>, prefers_dark: bool) -> Self {
        match persisted.and_then(|raw| raw.parse::<Theme>().ok()) {
            Some(theme) => Self { theme, source: ThemeSource::Explicit },
            None => Self { theme: Theme::from_prefers_dark(prefers_dark), source: ThemeSource::System },
        }
    }

    /// Explicit override: flip the theme and pin the source.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self { theme: self.theme.opposite(), source: ThemeSource::Explicit }
    }

    /// Apply an OS signal change. Returns `None` once the user has chosen.
    pub fn follow_system(self, prefers_dark: bool) -> Option<Self> {
        match self.source {
            ThemeSource::System => Some(Self { theme: Theme::from_prefers_dark(prefers_dark), source: ThemeSource::System }),
            ThemeSource::Explicit => None,
        }
    }

    pub fn is_explicit(self) -> bool {
        self.source == ThemeSource::Explicit
    }
}
