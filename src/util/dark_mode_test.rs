#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn media_query_signal_defaults_to_dark_scheme_query() {
    assert_eq!(MediaQuerySignal::default().query(), "(prefers-color-scheme: dark)");
    let custom = ThemeConfig::default().with_media_query("(prefers-contrast: more)");
    assert_eq!(MediaQuerySignal::from_config(&custom).query(), "(prefers-contrast: more)");
}

#[test]
fn media_query_signal_reports_light_off_browser() {
    assert_eq!(MediaQuerySignal::default().prefers_dark(), Ok(false));
}

#[test]
fn media_query_signal_subscription_is_inert_off_browser() {
    let subscription = MediaQuerySignal::default().subscribe(Box::new(|_| {})).unwrap();
    assert_eq!(format!("{subscription:?}"), "Subscription { active: false }");
}

#[test]
fn document_surface_markers_are_mutually_exclusive() {
    let surface = DocumentSurface::default();
    assert_eq!(surface.markers(Theme::Light), ("light", "dark"));
    assert_eq!(surface.markers(Theme::Dark), ("dark", "light"));
}

#[test]
fn document_surface_uses_configured_classes() {
    let config = ThemeConfig::default().with_classes("theme-day", "theme-night");
    let surface = DocumentSurface::from_config(&config);
    assert_eq!(surface.markers(Theme::Dark), ("theme-night", "theme-day"));
}

#[test]
fn document_surface_apply_is_noop_but_callable() {
    let surface = DocumentSurface::default();
    surface.apply(Theme::Light);
    surface.apply(Theme::Dark);
}
