//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own account, session, catalog and audit state so route handlers
//! can stay focused on protocol translation and cookie plumbing. All state
//! is in memory and lost on restart.

pub mod pets;
pub mod security_log;
pub mod session;
pub mod users;
