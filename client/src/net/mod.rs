//! Networking modules for the session endpoint and admin API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and defines the [`api::SessionService`] seam the
//! identity context is written against; `types` defines the wire schema.

pub mod api;
pub mod types;
