//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome while reading shared
//! state from Leptos context providers.

pub mod header;
pub mod loading;
