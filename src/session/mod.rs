//! Session handling: persisted bearer token and the page guard
//!
//! The token is opaque. Nothing here parses or validates it; presence is the
//! only thing the client relies on.

pub mod guard;
pub mod store;

pub use guard::{GuardOutcome, Navigator, PageGuard, Route, TerminalNavigator};
#[cfg(test)]
pub use guard::RecordingNavigator;
#[cfg(test)]
pub use store::MemorySessionStore;
pub use store::{FileSessionStore, SESSION_KEY, SessionStore};
