//! Global CLI options shared across all commands
//!
//! Collects the global flags once so handlers take a single argument.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are resolved in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format; `None` defers to the config file preference
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.orientor/config.yaml)
    pub config: Option<String>,

    /// Backend base address override
    pub api_url: Option<String>,

    /// Resume editor address override
    pub resume_url: Option<String>,

    /// Custom session file path (defaults to ~/.orientor/session.yaml)
    pub session_file: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            resume_url: cli.resume_url.clone(),
            session_file: cli.session_file.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    pub fn resume_url_ref(&self) -> Option<&str> {
        self.resume_url.as_deref()
    }

    pub fn session_file_ref(&self) -> Option<&str> {
        self.session_file.as_deref()
    }
}
