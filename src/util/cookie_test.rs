use super::*;

fn pair_of(set_cookie: &str) -> &str {
    set_cookie.split(';').next().unwrap()
}

#[test]
fn format_set_cookie_includes_max_age_and_scope() {
    let set = format_set_cookie("theme", "dark", Duration::from_secs(300));
    assert_eq!(pair_of(&set), "theme=dark");
    assert!(set.contains("Max-Age=300"));
    assert!(set.contains("Path=/"));
    assert!(set.contains("SameSite=Lax"));
}

#[test]
fn format_set_cookie_truncates_subsecond_ttl() {
    let set = format_set_cookie("theme", "light", Duration::from_millis(1500));
    assert!(set.contains("Max-Age=1"));
}

#[test]
fn find_cookie_locates_key_among_others() {
    let header = "session=abc123; theme=dark; lang=en";
    assert_eq!(find_cookie(header, "theme").as_deref(), Some("dark"));
    assert_eq!(find_cookie(header, "lang").as_deref(), Some("en"));
}

#[test]
fn find_cookie_missing_key_is_none() {
    assert_eq!(find_cookie("session=abc123", "theme"), None);
    assert_eq!(find_cookie("", "theme"), None);
}

#[test]
fn find_cookie_does_not_match_key_prefix() {
    assert_eq!(find_cookie("theme_old=dark; theme=light", "theme").as_deref(), Some("light"));
    assert_eq!(find_cookie("mytheme=dark", "theme"), None);
}

#[test]
fn find_cookie_unquotes_double_quoted_value() {
    assert_eq!(find_cookie("theme=\"dark\"", "theme").as_deref(), Some("dark"));
}

#[test]
fn quoted_record_still_resolves_as_explicit_choice() {
    use crate::state::theme::{Theme, ThemeSource, ThemeState};

    let stored = find_cookie("lang=en; theme=\"dark\"", "theme");
    let state = ThemeState::resolve(stored.as_deref(), false);
    assert_eq!(state, ThemeState { theme: Theme::Dark, source: ThemeSource::Explicit });
}

#[test]
fn find_cookie_skips_malformed_pairs() {
    assert_eq!(find_cookie("garbage; theme=light", "theme").as_deref(), Some("light"));
}

#[test]
fn written_record_reads_back_from_a_cookie_header() {
    for value in ["dark", "hi; there", "ünïcødé"] {
        let set = format_set_cookie("note", value, Duration::from_secs(60));
        let header = format!("other=1; {}", pair_of(&set));
        assert_eq!(find_cookie(&header, "note").as_deref(), Some(value));
    }
}

#[test]
fn separators_in_values_are_escaped_on_write() {
    let set = format_set_cookie("note", "hi; there", Duration::from_secs(60));
    assert!(!pair_of(&set).contains(' '));
    assert!(pair_of(&set).starts_with("note=hi"));
}

#[test]
fn cookie_store_is_empty_off_browser() {
    let store = CookieStore;
    assert_eq!(store.read("theme"), Ok(None));
    assert_eq!(store.write("theme", "dark", Duration::from_secs(300)), Ok(()));
    assert_eq!(store.read("theme"), Ok(None));
}
