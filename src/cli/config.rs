//! Configuration commands

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::config::{Config, normalize_base_url};
use crate::error::{ConfigError, Result};

/// Print the effective configuration after flags, env and file are applied
pub fn show<C>(ctx: &CommandContext<C>, opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;

    println!("Config file:  {}", path.display().to_string().cyan());
    println!("api_url:      {}", ctx.api_url);
    println!("resume_url:   {}", ctx.resume_url);
    println!("timeout_secs: {}", ctx.config.timeout_secs);
    println!(
        "format:       {}",
        format!("{:?}", ctx.format).to_lowercase()
    );
    Ok(())
}

/// Persist the backend address in the config file
pub fn set_url(opts: &GlobalOptions, url: &str) -> Result<()> {
    let url = normalize_base_url(url);
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Invalid(format!(
            "API URL must start with http:// or https://, got '{}'",
            url
        ))
        .into());
    }

    let mut config = Config::load_or_default(opts.config_ref())?;
    config.api_url = Some(url.clone());
    config.save_at(opts.config_ref())?;

    println!("{} Backend set to {}", "✓".green(), url.cyan());
    println!(
        "  Sessions are kept per backend; run {} if you have not signed in there yet.",
        "orientor login".cyan()
    );
    Ok(())
}
