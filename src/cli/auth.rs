//! Login, registration and logout

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::client::AuthApi;
use crate::error::Result;
use crate::session::Route;
use crate::view::View;

/// Use the given value or ask for it
fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?),
    }
}

fn password_or_prompt(value: Option<String>, confirm: bool) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }
    let theme = ColorfulTheme::default();
    let mut prompt = Password::with_theme(&theme).with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}

/// Sign in and store the returned token for this backend
pub async fn login<C: AuthApi>(
    ctx: &CommandContext<C>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let email = value_or_prompt(email, "Email")?;
    let password = password_or_prompt(password, false)?;

    let view = View::new("Login failed").with_loading_message("Signing in...");
    let token = ctx
        .load_with(view, ctx.client.login(&email, &password))
        .await?;

    ctx.session.set(&token.access_token)?;

    println!("{} Logged in as {}", "✓".green(), email.bold());
    ctx.navigator.redirect(Route::Home);
    Ok(())
}

/// Create an account, then send the user to login
pub async fn register<C: AuthApi>(
    ctx: &CommandContext<C>,
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let username = value_or_prompt(username, "Username")?;
    let email = value_or_prompt(email, "Email")?;
    let password = password_or_prompt(password, true)?;

    let view = View::new("Registration failed. Please try again.")
        .with_status_fallback(400, "Email already registered or invalid format.")
        .with_loading_message("Creating account...");
    let user = ctx
        .load_with(view, ctx.client.register(&username, &email, &password))
        .await?;

    println!(
        "{} Account created for {}",
        "✓".green(),
        user.email.bold()
    );
    ctx.navigator.redirect(Route::Login);
    Ok(())
}

/// Forget the stored session for this backend
pub fn logout<C>(ctx: &CommandContext<C>) -> Result<()> {
    let had_session = ctx.session.get().is_some();
    ctx.session.clear()?;

    if had_session {
        println!("{} Logged out", "✓".green());
    } else {
        println!("{} No active session", "○".dimmed());
    }
    ctx.navigator.redirect(Route::Login);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::MockOrientorClient;
    use crate::error::{ApiError, Error};
    use crate::session::{MemorySessionStore, RecordingNavigator, SessionStore};

    fn context(
        client: MockOrientorClient,
        session: Arc<MemorySessionStore>,
    ) -> (CommandContext<MockOrientorClient>, Arc<RecordingNavigator>) {
        let nav = Arc::new(RecordingNavigator::new());
        (
            CommandContext::from_parts(client, session, nav.clone()),
            nav,
        )
    }

    #[tokio::test]
    async fn test_login_stores_token_and_goes_home() {
        let session = Arc::new(MemorySessionStore::new());
        let client = MockOrientorClient::new().with_token("abc123").await;
        let (ctx, nav) = context(client, session.clone());

        login(
            &ctx,
            Some("ada@example.com".to_string()),
            Some("secret".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(session.get().as_deref(), Some("abc123"));
        assert_eq!(nav.routes(), vec![Route::Home]);
    }

    #[tokio::test]
    async fn test_login_failure_shows_detail_and_keeps_no_session() {
        let session = Arc::new(MemorySessionStore::new());
        let client = MockOrientorClient::new()
            .with_error(ApiError::RequestFailed {
                status: 400,
                detail: Some("Invalid credentials".to_string()),
            })
            .await;
        let (ctx, nav) = context(client, session.clone());

        let err = login(
            &ctx,
            Some("ada@example.com".to_string()),
            Some("wrong".to_string()),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::View(ref m) if m == "Invalid credentials"));
        assert!(session.get().is_none());
        assert!(nav.routes().is_empty());
    }

    #[tokio::test]
    async fn test_register_status_fallback() {
        let session = Arc::new(MemorySessionStore::new());
        let client = MockOrientorClient::new()
            .with_error(ApiError::RequestFailed {
                status: 400,
                detail: None,
            })
            .await;
        let (ctx, _nav) = context(client, session);

        let err = register(
            &ctx,
            Some("ada".to_string()),
            Some("ada@example.com".to_string()),
            Some("secret".to_string()),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Email already registered or invalid format."
        );
    }

    #[tokio::test]
    async fn test_register_navigates_to_login() {
        let session = Arc::new(MemorySessionStore::new());
        let (ctx, nav) = context(MockOrientorClient::new(), session.clone());

        register(
            &ctx,
            Some("ada".to_string()),
            Some("ada@example.com".to_string()),
            Some("secret".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(nav.routes(), vec![Route::Login]);
        assert!(session.get().is_none());
    }

    #[test]
    fn test_logout_clears_session() {
        let session = Arc::new(MemorySessionStore::with_token("abc123"));
        let (ctx, nav) = context(MockOrientorClient::new(), session.clone());

        logout(&ctx).unwrap();

        assert!(session.get().is_none());
        assert_eq!(nav.routes(), vec![Route::Login]);
    }
}
