//! Status command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::UserApi;
use crate::config::Config;
use crate::error::Result;
use crate::session::{FileSessionStore, Route};

/// Show where configuration and session live, and whether a session exists.
///
/// With `check`, the session is also verified against the backend through
/// the page guard.
pub async fn run<C: UserApi>(
    ctx: &CommandContext<C>,
    opts: &GlobalOptions,
    check: bool,
) -> Result<()> {
    println!("{}\n", "Orientor Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config_note = if config_path.exists() {
        String::new()
    } else {
        format!(" {}", "(not created, using defaults)".dimmed())
    };
    println!(
        "Config file:  {}{}",
        config_path.display().to_string().cyan(),
        config_note
    );
    println!("Backend:      {}", ctx.api_url.cyan());
    println!("Resume app:   {}", ctx.resume_url.cyan());

    let session_path = FileSessionStore::resolve_path(opts.session_file_ref())?;
    println!(
        "Session file: {}",
        session_path.display().to_string().cyan()
    );
    println!();

    if ctx.session.get().is_none() {
        println!("{} Not logged in", "✗".red());
        println!(
            "  → Run {} to sign in, or {} to create an account",
            Route::Login.command().cyan(),
            Route::Register.command().cyan()
        );
        return Ok(());
    }
    println!("{} Session stored for this backend", "✓".green());

    if check {
        ctx.guarded()?;
        let user = ctx
            .load("Failed to load user information", ctx.client.current_user())
            .await?;
        println!(
            "{} Session valid: signed in as {} (id {})",
            "✓".green(),
            user.email.bold(),
            user.id
        );
    }

    println!("\n{}", "Pages".bold());
    for route in Route::MENU {
        println!("  {:<15} {}", route.path(), route.command().dimmed());
    }

    Ok(())
}
