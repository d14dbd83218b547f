//! Theme preference reconciliation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three signals compete for the active theme: an explicit user choice, the
//! persisted record from an earlier visit, and the OS color-scheme setting.
//! `ThemeReconciler` owns the resolved `ThemeState` and is the only thing that
//! writes the persisted record or touches the presentation surface.
//!
//! The environment is reached through three seams so the same algorithm runs
//! against the browser (`util::cookie`, `util::dark_mode`) and against the
//! in-memory implementations below.
//!
//! ERROR HANDLING
//! ==============
//! Adapters report failures as `PreferenceError`; the reconciler logs and
//! swallows them. Rendering never waits on, or fails because of, preference
//! resolution.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::config::ThemeConfig;
use crate::state::theme::{Theme, ThemeSource, ThemeState};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    /// The environment has no usable store (no window, no document).
    #[error("preference storage unavailable")]
    StorageUnavailable,

    /// The store exists but rejected a read or write.
    #[error("preference storage failed: {0}")]
    Storage(String),

    /// The OS color-scheme signal cannot be queried.
    #[error("color-scheme signal unavailable")]
    SignalUnavailable,

    /// Registering a change listener failed.
    #[error("color-scheme subscription failed: {0}")]
    Subscribe(String),
}

/// Small string store with per-record expiry.
pub trait PreferenceStore {
    /// Read the unexpired value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a `PreferenceError` when the store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`, expiring `ttl` after now.
    ///
    /// # Errors
    ///
    /// Returns a `PreferenceError` when the store rejects the write.
    fn write(&self, key: &str, value: &str, ttl: Duration) -> Result<(), PreferenceError>;
}

/// OS-level dark color-scheme preference.
pub trait ColorSchemeSignal {
    /// Whether the OS currently prefers a dark color scheme.
    ///
    /// # Errors
    ///
    /// Returns `PreferenceError::SignalUnavailable` when the platform cannot report it.
    fn prefers_dark(&self) -> Result<bool, PreferenceError>;

    /// Register `listener` for change notifications until the returned
    /// `Subscription` is dropped.
    ///
    /// # Errors
    ///
    /// Returns a `PreferenceError` when the listener cannot be registered.
    fn subscribe(&self, listener: Box<dyn Fn(bool)>) -> Result<Subscription, PreferenceError>;
}

/// Global presentation surface. After `apply(theme)` exactly the marker for
/// `theme` is active.
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

/// Registration handle for a change listener. Dropping it unregisters.
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A handle with nothing to release, for environments without a signal.
    pub fn inert() -> Self {
        Self { release: None }
    }

    /// Unregister now. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.release.is_some()).finish()
    }
}

/// Owner of the active theme.
pub struct ThemeReconciler<S, P> {
    store: S,
    surface: P,
    config: ThemeConfig,
    state: ThemeState,
}

impl<S: PreferenceStore, P: ThemeSurface> ThemeReconciler<S, P> {
    /// Resolve the initial theme, persist it, and apply it.
    ///
    /// A valid persisted record wins and marks the state explicit; otherwise
    /// the OS signal decides. Any adapter failure falls back to `light`.
    pub fn init(store: S, signal: &impl ColorSchemeSignal, surface: P, config: ThemeConfig) -> Self {
        let prefers_dark = signal.prefers_dark().unwrap_or_else(|e| {
            leptos::logging::warn!("theme: {e}; assuming light");
            false
        });
        let persisted = store.read(&config.storage_key).unwrap_or_else(|e| {
            leptos::logging::warn!("theme: {e}; ignoring persisted value");
            None
        });

        let state = ThemeState::resolve(persisted.as_deref(), prefers_dark);
        let reconciler = Self { store, surface, config, state };
        reconciler.commit();
        reconciler
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn source(&self) -> ThemeSource {
        self.state.source
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Explicit override: flip the theme, pin the source, persist and apply.
    pub fn toggle(&mut self) -> ThemeState {
        self.state = self.state.toggled();
        self.commit();
        self.state
    }

    /// Handle an OS signal change. Returns the new state when it was applied,
    /// `None` when an explicit choice already exists.
    pub fn follow_system(&mut self, prefers_dark: bool) -> Option<ThemeState> {
        let next = self.state.follow_system(prefers_dark)?;
        self.state = next;
        self.commit();
        Some(next)
    }

    /// Persist with a refreshed expiry, then apply to the surface.
    fn commit(&self) {
        let theme = self.state.theme;
        if let Err(e) = self.store.write(&self.config.storage_key, theme.as_str(), self.config.ttl) {
            leptos::logging::warn!("theme: {e}; {theme} not persisted");
        }
        self.surface.apply(theme);
    }
}

/// Reconciler shared between the OS listener and explicit toggles.
pub type SharedThemeReconciler<S, P> = Arc<Mutex<ThemeReconciler<S, P>>>;

pub fn share<S, P>(reconciler: ThemeReconciler<S, P>) -> SharedThemeReconciler<S, P> {
    Arc::new(Mutex::new(reconciler))
}

/// Lock the shared reconciler. A panic in another holder cannot leave the
/// state half-updated, so poisoning is ignored.
pub fn lock<S, P>(shared: &SharedThemeReconciler<S, P>) -> MutexGuard<'_, ThemeReconciler<S, P>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Feed OS signal changes into `shared` while its source is `System`.
///
/// `on_change` receives each state the signal produced. Returns `None` when
/// the state is already explicit or the listener could not be registered.
/// The listener holds only a weak reference, so it goes quiet once the
/// reconciler is dropped even if the handle outlives it.
pub fn watch_system<S, P, F>(
    shared: &SharedThemeReconciler<S, P>,
    signal: &impl ColorSchemeSignal,
    on_change: F,
) -> Option<Subscription>
where
    S: PreferenceStore + 'static,
    P: ThemeSurface + 'static,
    F: Fn(ThemeState) + 'static,
{
    if lock(shared).state().is_explicit() {
        return None;
    }

    let weak = Arc::downgrade(shared);
    let listener = move |prefers_dark: bool| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let applied = lock(&shared).follow_system(prefers_dark);
        if let Some(state) = applied {
            on_change(state);
        }
    };

    match signal.subscribe(Box::new(listener)) {
        Ok(subscription) => Some(subscription),
        Err(e) => {
            leptos::logging::warn!("theme: {e}; OS changes will be ignored");
            None
        }
    }
}

// =============================================================
// In-memory implementations for native hosts
// =============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredRecord {
    value: String,
    expires_at: Duration,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    now: Duration,
    records: HashMap<String, StoredRecord>,
}

/// Expiring key-value store driven by a manual clock.
///
/// Clones share the same records. Time only moves through `advance`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn inner(&self) -> MutexGuard<'_, MemoryStoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move the clock forward; records whose expiry has passed disappear.
    pub fn advance(&self, by: Duration) {
        let mut inner = self.inner();
        inner.now += by;
        let now = inner.now;
        inner.records.retain(|_, record| record.expires_at > now);
    }

    /// Time left before `key` expires.
    pub fn remaining(&self, key: &str) -> Option<Duration> {
        let inner = self.inner();
        inner.records.get(key).map(|record| record.expires_at.saturating_sub(inner.now))
    }

    /// Seed a record without going through a reconciler.
    pub fn insert(&self, key: &str, value: &str, ttl: Duration) {
        let mut inner = self.inner();
        let expires_at = inner.now + ttl;
        inner.records.insert(key.to_owned(), StoredRecord { value: value.to_owned(), expires_at });
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let inner = self.inner();
        Ok(inner
            .records
            .get(key)
            .filter(|record| record.expires_at > inner.now)
            .map(|record| record.value.clone()))
    }

    fn write(&self, key: &str, value: &str, ttl: Duration) -> Result<(), PreferenceError> {
        self.insert(key, value, ttl);
        Ok(())
    }
}

type Listeners = Rc<RefCell<Vec<(u64, Rc<dyn Fn(bool)>)>>>;

/// OS signal whose state is pushed by the host.
#[derive(Clone, Default)]
pub struct ManualSignal {
    prefers_dark: Rc<RefCell<bool>>,
    listeners: Listeners,
    next_id: Rc<RefCell<u64>>,
}

impl ManualSignal {
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark: Rc::new(RefCell::new(prefers_dark)), ..Self::default() }
    }

    /// Change the reported state and notify every registered listener.
    pub fn set(&self, prefers_dark: bool) {
        *self.prefers_dark.borrow_mut() = prefers_dark;
        // Snapshot so listeners may unsubscribe while being notified.
        let listeners: Vec<_> = self.listeners.borrow().iter().map(|(_, l)| Rc::clone(l)).collect();
        for listener in listeners {
            listener(prefers_dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ColorSchemeSignal for ManualSignal {
    fn prefers_dark(&self) -> Result<bool, PreferenceError> {
        Ok(*self.prefers_dark.borrow())
    }

    fn subscribe(&self, listener: Box<dyn Fn(bool)>) -> Result<Subscription, PreferenceError> {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        self.listeners.borrow_mut().push((id, Rc::from(listener)));

        let listeners = Rc::clone(&self.listeners);
        Ok(Subscription::new(move || {
            listeners.borrow_mut().retain(|(entry, _)| *entry != id);
        }))
    }
}

impl std::fmt::Debug for ManualSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualSignal")
            .field("prefers_dark", &*self.prefers_dark.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
