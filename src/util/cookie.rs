//! Cookie-backed preference store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The persisted theme record lives in a first-party cookie so the server can
//! see it on the next request. Serialization and parsing go through the
//! `cookie` crate; only `CookieStore` touches `document.cookie`, and only under
//! `hydrate`.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use std::time::Duration;

use cookie::{Cookie, SameSite};

use super::theme::{PreferenceError, PreferenceStore};

/// Format a `document.cookie` assignment for `key=value` expiring after `ttl`.
pub fn format_set_cookie(key: &str, value: &str, ttl: Duration) -> String {
    let max_age = time::Duration::try_from(ttl).unwrap_or(time::Duration::MAX);
    Cookie::build((key, value))
        .max_age(max_age)
        .path("/")
        .same_site(SameSite::Lax)
        .build()
        .encoded()
        .to_string()
}

/// Find `key` in a `document.cookie` string (`a=1; b=2`).
///
/// Malformed pairs are skipped; a double-quoted value is unquoted.
pub fn find_cookie(header: &str, key: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == key)
        .map(|cookie| cookie.value_trimmed().to_owned())
}

/// Browser cookie jar. Off-browser every read is empty and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

#[cfg(feature = "hydrate")]
fn html_document() -> Result<web_sys::HtmlDocument, PreferenceError> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .ok_or(PreferenceError::StorageUnavailable)
}

impl PreferenceStore for CookieStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        #[cfg(feature = "hydrate")]
        {
            let header = html_document()?
                .cookie()
                .map_err(|e| PreferenceError::Storage(format!("{e:?}")))?;
            Ok(find_cookie(&header, key))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(&self, key: &str, value: &str, ttl: Duration) -> Result<(), PreferenceError> {
        #[cfg(feature = "hydrate")]
        {
            html_document()?
                .set_cookie(&format_set_cookie(key, value, ttl))
                .map_err(|e| PreferenceError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value, ttl);
            Ok(())
        }
    }
}
