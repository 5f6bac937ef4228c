//! Page guard and navigation targets
//!
//! Every protected command goes through [`PageGuard`] before it touches the
//! network. The guard only checks that a token is present; the backend still
//! decides whether it is valid.

use std::fmt;

use colored::Colorize;

use super::store::SessionStore;
use crate::error::{Error, Result};

/// Navigation destinations, one per page of the Orientor client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Profile,
    Peers,
    Messages,
    Chat(i64),
    Space,
    Cv,
    Search,
}

impl Route {
    /// Pages offered to a signed-in user, in menu order
    pub const MENU: [Route; 6] = [
        Route::Profile,
        Route::Peers,
        Route::Messages,
        Route::Space,
        Route::Cv,
        Route::Search,
    ];

    /// Client path for this destination
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Peers => "/peers".to_string(),
            Route::Messages => "/messages".to_string(),
            Route::Chat(peer_id) => format!("/chat/{peer_id}"),
            Route::Space => "/space".to_string(),
            Route::Cv => "/cv".to_string(),
            Route::Search => "/vector-search".to_string(),
        }
    }

    /// The command that reaches this destination
    pub fn command(&self) -> String {
        match self {
            Route::Home => "orientor status".to_string(),
            Route::Login => "orientor login".to_string(),
            Route::Register => "orientor register".to_string(),
            Route::Profile => "orientor profile show".to_string(),
            Route::Peers => "orientor peers".to_string(),
            Route::Messages => "orientor messages".to_string(),
            Route::Chat(peer_id) => format!("orientor chat peer {peer_id}"),
            Route::Space => "orientor space list".to_string(),
            Route::Cv => "orientor cv open".to_string(),
            Route::Search => "orientor search <QUERY>".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Performs navigation to another page
pub trait Navigator: Send + Sync {
    fn redirect(&self, route: Route);
}

/// Navigator that tells the user which command to run next
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn redirect(&self, route: Route) {
        log::debug!("Navigating to {}", route);
        match route {
            Route::Login => eprintln!(
                "{} Please log in: run {}",
                "→".yellow(),
                route.command().cyan()
            ),
            _ => eprintln!("{} Next: {}", "→".cyan(), route.command().cyan()),
        }
    }
}

/// Navigator that records destinations for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: std::sync::Mutex<Vec<Route>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn redirect(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Result of evaluating the guard for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// A session exists; the command may run its authenticated work
    Proceed,
    /// No session; navigation already happened and the command must stop
    Redirected(Route),
}

/// Gate for protected commands
pub struct PageGuard;

impl PageGuard {
    /// Check for a stored session, navigating to login when there is none
    pub fn check(store: &dyn SessionStore, navigator: &dyn Navigator) -> GuardOutcome {
        if store.get().is_some() {
            log::debug!("Guard: session present, proceeding");
            GuardOutcome::Proceed
        } else {
            log::debug!("Guard: no session, redirecting to login");
            navigator.redirect(Route::Login);
            GuardOutcome::Redirected(Route::Login)
        }
    }

    /// Like [`PageGuard::check`] but as a `Result` for use with `?`
    pub fn require(store: &dyn SessionStore, navigator: &dyn Navigator) -> Result<()> {
        match Self::check(store, navigator) {
            GuardOutcome::Proceed => Ok(()),
            GuardOutcome::Redirected(route) => Err(Error::Redirected(route)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn test_absent_token_redirects_to_login() {
        let store = MemorySessionStore::new();
        let nav = RecordingNavigator::new();

        let outcome = PageGuard::check(&store, &nav);

        assert_eq!(outcome, GuardOutcome::Redirected(Route::Login));
        assert_eq!(nav.routes(), vec![Route::Login]);
    }

    #[test]
    fn test_present_token_proceeds_without_navigation() {
        let store = MemorySessionStore::with_token("abc123");
        let nav = RecordingNavigator::new();

        assert_eq!(PageGuard::check(&store, &nav), GuardOutcome::Proceed);
        assert!(nav.routes().is_empty());
    }

    #[test]
    fn test_require_maps_redirect_to_error() {
        let store = MemorySessionStore::new();
        let nav = RecordingNavigator::new();

        match PageGuard::require(&store, &nav) {
            Err(Error::Redirected(Route::Login)) => (),
            other => panic!("Expected redirect to login, got {:?}", other),
        }
    }

    #[test]
    fn test_guard_is_reevaluated_each_time() {
        let store = MemorySessionStore::with_token("abc123");
        let nav = RecordingNavigator::new();

        assert!(PageGuard::require(&store, &nav).is_ok());
        store.clear().unwrap();
        assert!(PageGuard::require(&store, &nav).is_err());
        assert_eq!(nav.routes(), vec![Route::Login]);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Home.to_string(), "/");
        assert_eq!(Route::Chat(42).path(), "/chat/42");
        assert_eq!(Route::Chat(42).command(), "orientor chat peer 42");
    }
}
