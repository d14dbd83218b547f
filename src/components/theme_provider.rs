//! App-wide theme context and the explicit-override button.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ThemeReconciler` is built per app mount. Components never see it
//! directly: they read a `ThemeContext`, whose only mutation is `toggle`.
//! The OS listener lives in the reactive owner and is released on cleanup or
//! on the first explicit toggle, whichever comes first.

#[cfg(test)]
#[path = "theme_provider_test.rs"]
mod theme_provider_test;

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::state::theme::{Theme, ThemeSource, ThemeState};
use crate::util::cookie::CookieStore;
use crate::util::dark_mode::{DocumentSurface, MediaQuerySignal};
use crate::util::theme::{self, ColorSchemeSignal, PreferenceStore, Subscription, ThemeReconciler, ThemeSurface};

/// Read handle to the active theme, copied freely into any component.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    state: ReadSignal<ThemeState>,
    toggle: Callback<()>,
}

impl ThemeContext {
    pub fn state(&self) -> ReadSignal<ThemeState> {
        self.state
    }

    /// Active theme (tracked).
    pub fn theme(&self) -> Theme {
        self.state.get().theme
    }

    /// Provenance of the active theme (tracked).
    pub fn source(&self) -> ThemeSource {
        self.state.get().source
    }

    /// Explicit override: flip the theme and stop following the OS.
    pub fn toggle(&self) {
        self.toggle.run(());
    }
}

/// Build the theme context over the browser cookie jar, `matchMedia`, and the
/// document root classes.
pub fn provide_theme() -> ThemeContext {
    let config = ThemeConfig::default();
    let os_signal = MediaQuerySignal::from_config(&config);
    let surface = DocumentSurface::from_config(&config);
    provide_theme_with(CookieStore, &os_signal, surface, config)
}

/// Build the theme context over the given adapters and provide it.
pub fn provide_theme_with<S, P>(
    store: S,
    os_signal: &impl ColorSchemeSignal,
    surface: P,
    config: ThemeConfig,
) -> ThemeContext
where
    S: PreferenceStore + Send + 'static,
    P: ThemeSurface + Send + 'static,
{
    let shared = theme::share(ThemeReconciler::init(store, os_signal, surface, config));
    let (state, set_state) = signal(theme::lock(&shared).state());

    let subscription =
        StoredValue::new_local(theme::watch_system(&shared, os_signal, move |next| set_state.set(next)));
    on_cleanup(move || {
        subscription.try_update_value(release);
    });

    let toggle = Callback::new(move |()| {
        let next = theme::lock(&shared).toggle();
        subscription.try_update_value(release);
        set_state.set(next);
    });

    let ctx = ThemeContext { state, toggle };
    provide_context(ctx);
    ctx
}

fn release(slot: &mut Option<Subscription>) {
    *slot = None;
}

/// The nearest provided `ThemeContext`.
///
/// # Panics
///
/// Panics when called outside a `ThemeProvider`.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Provides `ThemeContext` to its children.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    provide_theme();
    children()
}

/// Glyph shown on the toggle: the theme a click switches to.
pub fn toggle_glyph(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    }
}

/// Light/dark toggle button.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| theme.toggle()
            title="Toggle dark mode"
        >
            {move || toggle_glyph(theme.theme())}
        </button>
    }
}
