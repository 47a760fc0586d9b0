//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome (layouts, navigation, placeholders) while
//! reading identity from Leptos context providers.

pub mod layout;
pub mod pending;
