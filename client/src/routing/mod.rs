//! Client-side routing: route table, guard, landing resolver, dispatcher.
//!
//! ARCHITECTURE
//! ============
//! The Leptos router only supplies the current location and the navigate
//! primitive. Which view renders is decided here from plain data so the whole
//! authorization flow is testable without a browser:
//!
//! - `table`: static path patterns with their view and required role.
//! - `guard`: role/auth check for a protected view.
//! - `resolver`: one-shot landing redirect state machine.
//! - `dispatch`: table lookup followed by the guard.

pub mod dispatch;
pub mod guard;
pub mod resolver;
pub mod table;
