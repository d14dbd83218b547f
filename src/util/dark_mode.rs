//! Browser side of the theme: the OS color-scheme signal and the `<html>`
//! class markers.
//!
//! `MediaQuerySignal` wraps `matchMedia`; `DocumentSurface` keeps exactly one
//! of the light/dark classes on the document root. Both require a browser
//! environment and degrade to inert behavior under SSR and native tests.
//!
//! TRADE-OFFS
//! ==========
//! Older Safari releases only expose the legacy `addListener` API on
//! `MediaQueryList`. Subscription tries `addEventListener("change")` first and
//! falls back when that call throws.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::ThemeConfig;
use crate::state::theme::Theme;

use super::theme::{ColorSchemeSignal, PreferenceError, Subscription, ThemeSurface};

/// OS dark-mode preference read through `window.matchMedia`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaQuerySignal {
    query: String,
}

impl MediaQuerySignal {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }

    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::new(config.media_query.clone())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    #[cfg(feature = "hydrate")]
    fn media_query_list(&self) -> Result<web_sys::MediaQueryList, PreferenceError> {
        web_sys::window()
            .and_then(|w| w.match_media(&self.query).ok().flatten())
            .ok_or(PreferenceError::SignalUnavailable)
    }
}

impl Default for MediaQuerySignal {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl ColorSchemeSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> Result<bool, PreferenceError> {
        #[cfg(feature = "hydrate")]
        {
            Ok(self.media_query_list()?.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(false)
        }
    }

    fn subscribe(&self, listener: Box<dyn Fn(bool)>) -> Result<Subscription, PreferenceError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let mql = self.media_query_list()?;
            let callback = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |event: web_sys::MediaQueryListEvent| listener(event.matches()),
            );

            if mql
                .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
                .is_ok()
            {
                return Ok(Subscription::new(move || {
                    let _ = mql.remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
                    drop(callback);
                }));
            }

            #[allow(deprecated)]
            mql.add_listener_with_opt_callback(Some(callback.as_ref().unchecked_ref()))
                .map_err(|e| PreferenceError::Subscribe(format!("{e:?}")))?;
            Ok(Subscription::new(move || {
                #[allow(deprecated)]
                let _ = mql.remove_listener_with_opt_callback(Some(callback.as_ref().unchecked_ref()));
                drop(callback);
            }))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop(listener);
            Ok(Subscription::inert())
        }
    }
}

/// Class markers on `<html>`; exactly one is present after every `apply`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSurface {
    light_class: String,
    dark_class: String,
}

impl DocumentSurface {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            light_class: config.class_for(Theme::Light).to_owned(),
            dark_class: config.class_for(Theme::Dark).to_owned(),
        }
    }

    /// `(class to add, class to remove)` for `theme`.
    pub fn markers(&self, theme: Theme) -> (&str, &str) {
        match theme {
            Theme::Light => (&self.light_class, &self.dark_class),
            Theme::Dark => (&self.dark_class, &self.light_class),
        }
    }
}

impl Default for DocumentSurface {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl ThemeSurface for DocumentSurface {
    fn apply(&self, theme: Theme) {
        let (add, remove) = self.markers(theme);
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
                let class_list = el.class_list();
                let _ = class_list.remove_1(remove);
                let _ = class_list.add_1(add);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (add, remove);
        }
    }
}
