//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only identity lives here today; page-local state stays in the pages.

pub mod auth;
