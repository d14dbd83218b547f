use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::*;
use crate::util::theme::{ManualSignal, MemoryStore};

#[derive(Clone, Default)]
struct RecordingSurface {
    applied: Arc<Mutex<Vec<Theme>>>,
}

impl ThemeSurface for RecordingSurface {
    fn apply(&self, theme: Theme) {
        self.applied.lock().unwrap().push(theme);
    }
}

fn provide(store: &MemoryStore, os: &ManualSignal) -> ThemeContext {
    provide_theme_with(store.clone(), os, RecordingSurface::default(), ThemeConfig::default())
}

#[test]
fn context_follows_os_until_toggled() {
    let owner = Owner::new();
    owner.with(|| {
        let os = ManualSignal::new(false);
        let ctx = provide(&MemoryStore::new(), &os);
        assert_eq!(ctx.state().get_untracked(), ThemeState { theme: Theme::Light, source: ThemeSource::System });
        assert_eq!(os.listener_count(), 1);

        os.set(true);
        assert_eq!(ctx.state().get_untracked(), ThemeState { theme: Theme::Dark, source: ThemeSource::System });

        ctx.toggle();
        assert_eq!(ctx.state().get_untracked(), ThemeState { theme: Theme::Light, source: ThemeSource::Explicit });
        assert_eq!(os.listener_count(), 0);

        os.set(false);
        os.set(true);
        assert_eq!(ctx.state().get_untracked().theme, Theme::Light);
    });
}

#[test]
fn persisted_choice_skips_os_subscription() {
    let owner = Owner::new();
    owner.with(|| {
        let store = MemoryStore::new();
        store.insert("theme", "dark", Duration::from_secs(300));
        let os = ManualSignal::new(false);

        let ctx = provide(&store, &os);

        assert_eq!(ctx.state().get_untracked(), ThemeState { theme: Theme::Dark, source: ThemeSource::Explicit });
        assert_eq!(os.listener_count(), 0);
    });
}

#[test]
fn toggle_persists_through_the_store() {
    let owner = Owner::new();
    owner.with(|| {
        let store = MemoryStore::new();
        let ctx = provide(&store, &ManualSignal::new(false));

        ctx.toggle();
        assert_eq!(store.read("theme").unwrap().as_deref(), Some("dark"));

        ctx.toggle();
        assert_eq!(store.read("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(ctx.state().get_untracked().source, ThemeSource::Explicit);
    });
}

#[test]
fn use_theme_returns_provided_context() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = provide(&MemoryStore::new(), &ManualSignal::new(true));
        let consumer = use_theme();

        assert_eq!(consumer.state().get_untracked().theme, Theme::Dark);
        consumer.toggle();
        assert_eq!(ctx.state().get_untracked().theme, Theme::Light);
    });
}

#[test]
fn owner_cleanup_releases_os_subscription() {
    let owner = Owner::new();
    let os = ManualSignal::new(false);
    owner.with(|| {
        provide(&MemoryStore::new(), &os);
    });
    assert_eq!(os.listener_count(), 1);

    owner.cleanup();

    assert_eq!(os.listener_count(), 0);
}

#[test]
fn browser_adapters_resolve_to_light_off_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = provide_theme();
        assert_eq!(ctx.state().get_untracked(), ThemeState { theme: Theme::Light, source: ThemeSource::System });
    });
}

// =============================================================================
// ThemeToggle
// =============================================================================

#[test]
fn toggle_glyph_points_at_the_other_theme() {
    assert_eq!(toggle_glyph(Theme::Light), "☾");
    assert_eq!(toggle_glyph(Theme::Dark), "☀");
}

#[test]
fn toggle_button_builds_under_provider_and_tracks_clicks() {
    let owner = Owner::new();
    owner.with(|| {
        let os = ManualSignal::new(false);
        let ctx = provide(&MemoryStore::new(), &os);
        let _button = view! { <ThemeToggle/> };
        assert_eq!(toggle_glyph(ctx.state().get_untracked().theme), "☾");

        ctx.toggle();

        assert_eq!(toggle_glyph(ctx.state().get_untracked().theme), "☀");
        assert_eq!(os.listener_count(), 0);
    });
}

#[test]
#[should_panic]
fn toggle_button_requires_a_provider() {
    let owner = Owner::new();
    owner.with(|| {
        let _button = view! { <ThemeToggle/> };
    });
}
