//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded views share one redirect predicate, and the session lookup happens
//! exactly once per app mount.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";

/// Whether a guarded route should send the visitor to the login page.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Create the app-wide auth signal, provide it as context, and start the
/// session lookup in the browser.
pub fn provide_auth() -> RwSignal<AuthState> {
    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        if user.is_none() {
            leptos::logging::log!("no active session");
        }
        auth.set(AuthState::resolved(user));
    });

    auth
}

/// Log out and clear the local session state.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        auth.set(AuthState::resolved(None));
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href(LOGIN_PATH);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    auth.set(AuthState::resolved(None));
}

