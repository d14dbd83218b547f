//! # reaction-client
//!
//! Leptos + WASM client library for the surprise-message / reaction-video app.
//!
//! This crate holds the browser-side session state and theme handling: the
//! theme reconciler with its cookie, `matchMedia`, and document-class adapters,
//! the `ThemeProvider` context, and the auth-session helpers that talk to the
//! HTTP session API. Message creation, reaction capture, and moderation are
//! server-owned and not part of this crate.

pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Install the browser panic hook and route `log` records to the console.
///
/// Call once from the hydrate entry point before mounting the app.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
}
