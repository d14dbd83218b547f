//! Theme configuration: storage key, record lifetime, and presentation markers.
//!
//! DESIGN
//! ======
//! All knobs have named defaults so the browser entry point can call
//! `ThemeConfig::default()` while native hosts and tests override individual
//! fields through the `with_*` builders.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::theme::Theme;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_TTL_SECS: u64 = 300;
pub const DEFAULT_DARK_CLASS: &str = "dark";
pub const DEFAULT_LIGHT_CLASS: &str = "light";
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Key of the persisted record.
    pub storage_key: String,
    /// Lifetime of the persisted record, refreshed on every write.
    pub ttl: Duration,
    /// Class applied to the document root while the dark theme is active.
    pub dark_class: String,
    /// Class applied to the document root while the light theme is active.
    pub light_class: String,
    /// Media query whose match state is the OS-level dark preference.
    pub media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            light_class: DEFAULT_LIGHT_CLASS.to_owned(),
            media_query: DEFAULT_MEDIA_QUERY.to_owned(),
        }
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_classes(mut self, light: impl Into<String>, dark: impl Into<String>) -> Self {
        self.light_class = light.into();
        self.dark_class = dark.into();
        self
    }

    #[must_use]
    pub fn with_media_query(mut self, query: impl Into<String>) -> Self {
        self.media_query = query.into();
        self
    }

    /// Style marker for `theme`. The marker for `theme.opposite()` is the one
    /// that must be removed when this one is applied.
    pub fn class_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light_class,
            Theme::Dark => &self.dark_class,
        }
    }
}
