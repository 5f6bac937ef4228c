//! Command execution context
//!
//! Resolves config, session and client once so command handlers only deal
//! with their own page logic.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::OrientorClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::{FileSessionStore, Navigator, PageGuard, SessionStore, TerminalNavigator};
use crate::view::{View, ViewContext};

/// Context for command execution.
///
/// Generic over the client so handlers can be driven by the mock client in
/// tests.
pub struct CommandContext<C = OrientorClient> {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// API client bound to this context's session
    pub client: C,
    /// Session storage for the resolved backend origin
    pub session: Arc<dyn SessionStore>,
    /// Where guard and 401 redirects go
    pub navigator: Arc<dyn Navigator>,
    /// Resolved output format
    pub format: OutputFormat,
    /// Normalized backend base address
    pub api_url: String,
    /// Resume editor base address
    pub resume_url: String,
}

impl CommandContext<OrientorClient> {
    /// Build the context for a real run.
    ///
    /// Precedence for every value is flag/env, then config file, then
    /// built-in default.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?;
        let api_url = config.api_url(opts.api_url_ref())?;
        let resume_url = config.resume_url(opts.resume_url_ref());

        let session_path = FileSessionStore::resolve_path(opts.session_file_ref())?;
        let store = FileSessionStore::new(session_path, api_url.clone());
        log::debug!(
            "Session file {} (origin {})",
            store.path().display(),
            store.origin()
        );
        let session: Arc<dyn SessionStore> = Arc::new(store);

        let client = OrientorClient::new(
            &api_url,
            session.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_name)
            })
            .unwrap_or_default();

        log::debug!("Context: api_url={} format={:?}", api_url, format);

        Ok(Self {
            config,
            client,
            session,
            navigator: Arc::new(TerminalNavigator),
            format,
            api_url,
            resume_url,
        })
    }
}

impl<C> CommandContext<C> {
    /// Assemble a context from already-built parts
    #[cfg(test)]
    pub fn from_parts(
        client: C,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let config = Config::default();
        let api_url = crate::config::DEFAULT_API_URL.to_string();
        let resume_url = crate::config::DEFAULT_RESUME_URL.to_string();
        Self {
            config,
            client,
            session,
            navigator,
            format: OutputFormat::Table,
            api_url,
            resume_url,
        }
    }

    pub fn view_context(&self) -> ViewContext<'_> {
        ViewContext {
            session: self.session.as_ref(),
            navigator: self.navigator.as_ref(),
        }
    }

    /// Page guard for protected commands; stops the command when there is
    /// no session
    pub fn guarded(&self) -> Result<()> {
        PageGuard::require(self.session.as_ref(), self.navigator.as_ref())
    }

    /// Run one request through a view with the given fallback message
    pub async fn load<T, F>(&self, fallback: &str, action: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.load_with(View::new(fallback), action).await
    }

    /// Run one request through a preconfigured view
    pub async fn load_with<T, F>(&self, mut view: View<T>, action: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        view.run(self.view_context(), action).await;
        view.finish()
    }
}
