//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from state and
//! component logic to improve reuse and testability.

pub mod auth;
pub mod cookie;
pub mod dark_mode;
pub mod theme;
