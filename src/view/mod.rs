//! Per-command UI state
//!
//! Each command drives one [`View`] through `idle → loading → (success | error)`.
//! Errors stop here: they become a message in the view's state and never
//! propagate as raw transport errors.

use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{ApiError, Error, Result};
use crate::session::{Navigator, Route, SessionStore};

/// Shown when the backend rejects the session
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Shown when no response was received
pub const NETWORK_MESSAGE: &str =
    "Cannot connect to the server. Please check your connection and that the backend is running.";

/// The four states a view can be in
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

/// What a view needs from its surroundings
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub session: &'a dyn SessionStore,
    pub navigator: &'a dyn Navigator,
}

/// Local state machine for one command's workflow
pub struct View<T> {
    state: ViewState<T>,
    fallback: String,
    status_fallbacks: Vec<(u16, String)>,
    loading_message: String,
}

impl<T> View<T> {
    /// New idle view; `fallback` is shown when the server gives no detail
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            state: ViewState::Idle,
            fallback: fallback.into(),
            status_fallbacks: Vec::new(),
            loading_message: "Loading...".to_string(),
        }
    }

    /// Fallback for one specific status, used when the server gives no detail
    pub fn with_status_fallback(mut self, status: u16, message: impl Into<String>) -> Self {
        self.status_fallbacks.push((status, message.into()));
        self
    }

    /// Spinner text while loading
    pub fn with_loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = message.into();
        self
    }

    #[cfg(test)]
    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    /// Back to idle, ready for the next user action
    #[cfg(test)]
    pub fn reset(&mut self) {
        self.state = ViewState::Idle;
    }

    /// Run one request through the state machine.
    ///
    /// A submission while already loading is ignored. On `Unauthorized` the
    /// session is cleared and the navigator is sent to login once.
    pub async fn run<F>(&mut self, ctx: ViewContext<'_>, action: F) -> &ViewState<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.is_loading() {
            log::debug!("View busy, ignoring submission");
            return &self.state;
        }

        self.state = ViewState::Loading;
        let spinner = spinner(&self.loading_message);
        let outcome = action.await;
        spinner.finish_and_clear();

        self.state = match outcome {
            Ok(value) => {
                log::debug!("View: loading -> success");
                ViewState::Success(value)
            }
            Err(err) => {
                if matches!(err, Error::Api(ApiError::Unauthorized)) {
                    if let Err(e) = ctx.session.clear() {
                        log::warn!("Failed to clear session after 401: {}", e);
                    }
                    ctx.navigator.redirect(Route::Login);
                }
                let message = self.message_for(&err);
                log::debug!("View: loading -> error ({})", message);
                ViewState::Error(message)
            }
        };

        &self.state
    }

    /// Message surfaced to the user for a failure
    pub fn message_for(&self, err: &Error) -> String {
        match err {
            Error::Api(ApiError::Unauthorized) => SESSION_EXPIRED_MESSAGE.to_string(),
            Error::Api(api @ ApiError::RequestFailed { .. }) => match api.detail() {
                Some(detail) => detail.to_string(),
                None => self
                    .status_fallbacks
                    .iter()
                    .find(|(s, _)| Some(*s) == api.status())
                    .map(|(_, m)| m.clone())
                    .unwrap_or_else(|| self.fallback.clone()),
            },
            Error::Api(ApiError::Network(_)) => NETWORK_MESSAGE.to_string(),
            Error::Api(ApiError::InvalidResponse(_)) => self.fallback.clone(),
            other => other.to_string(),
        }
    }

    /// Consume the view, turning its final state into a `Result`
    pub fn finish(self) -> Result<T> {
        match self.state {
            ViewState::Success(value) => Ok(value),
            ViewState::Error(message) => Err(Error::View(message)),
            ViewState::Idle | ViewState::Loading => {
                Err(Error::Other("view finished without a result".to_string()))
            }
        }
    }
}

fn spinner(message: &str) -> ProgressBar {
    // Hidden automatically when stderr is not a terminal
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
