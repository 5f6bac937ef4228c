//! Account commands

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::client::UserApi;
use crate::client::models::AccountUpdate;
use crate::error::{Error, Result};
use crate::output::render_item;

/// Show the signed-in account
pub async fn whoami<C: UserApi>(ctx: &CommandContext<C>) -> Result<()> {
    ctx.guarded()?;

    let user = ctx
        .load("Failed to load user information", ctx.client.current_user())
        .await?;

    let out = render_item(&user, ctx.format, |u| {
        format!("{} (id {})", u.email.bold(), u.id)
    })?;
    println!("{}", out);
    Ok(())
}

/// Change username, email or password
pub async fn update<C: UserApi>(ctx: &CommandContext<C>, update: AccountUpdate) -> Result<()> {
    if update.is_empty() {
        return Err(Error::View(
            "Nothing to update. Pass --username, --email or --password".to_string(),
        ));
    }

    ctx.guarded()?;

    let user = ctx
        .load("Update failed", ctx.client.update_account(&update))
        .await?;

    println!(
        "{} Account updated: {}{}",
        "✓".green(),
        user.email.bold(),
        user.username
            .as_deref()
            .map(|u| format!(" ({})", u))
            .unwrap_or_default()
    );
    Ok(())
}

/// Change password, prompting for values not given as flags
pub async fn password<C: UserApi>(
    ctx: &CommandContext<C>,
    old: Option<String>,
    new: Option<String>,
) -> Result<()> {
    ctx.guarded()?;

    let theme = ColorfulTheme::default();
    let old = match old {
        Some(v) => v,
        None => Password::with_theme(&theme)
            .with_prompt("Current password")
            .interact()?,
    };
    let new = match new {
        Some(v) => v,
        None => Password::with_theme(&theme)
            .with_prompt("New password")
            .with_confirmation("Confirm new password", "Passwords do not match")
            .interact()?,
    };

    ctx.load(
        "Failed to change password",
        ctx.client.change_password(&old, &new),
    )
    .await?;

    println!("{} Password changed", "✓".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::MockOrientorClient;
    use crate::client::models::CurrentUser;
    use crate::error::ApiError;
    use crate::session::{MemorySessionStore, RecordingNavigator};

    async fn signed_in(client: MockOrientorClient) -> CommandContext<MockOrientorClient> {
        let client = client
            .with_current_user(CurrentUser {
                id: 7,
                email: "ada@example.com".to_string(),
            })
            .await;
        CommandContext::from_parts(
            client,
            Arc::new(MemorySessionStore::with_token("abc123")),
            Arc::new(RecordingNavigator::new()),
        )
    }

    #[tokio::test]
    async fn test_whoami_calls_current_user() {
        let ctx = signed_in(MockOrientorClient::new()).await;
        whoami(&ctx).await.unwrap();
        assert_eq!(ctx.client.calls("current_user").await, 1);
    }

    #[tokio::test]
    async fn test_update_requires_a_field() {
        let ctx = signed_in(MockOrientorClient::new()).await;
        assert!(update(&ctx, AccountUpdate::default()).await.is_err());
        assert_eq!(ctx.client.total_calls().await, 0);
    }

    #[tokio::test]
    async fn test_update_surfaces_server_detail() {
        let client = MockOrientorClient::new()
            .with_error(ApiError::RequestFailed {
                status: 400,
                detail: Some("Email already registered".to_string()),
            })
            .await;
        let ctx = signed_in(client).await;

        let err = update(
            &ctx,
            AccountUpdate {
                email: Some("taken@example.com".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "Email already registered");
    }

    #[tokio::test]
    async fn test_password_with_flags() {
        let ctx = signed_in(MockOrientorClient::new()).await;
        password(&ctx, Some("old".to_string()), Some("new".to_string()))
            .await
            .unwrap();
        assert_eq!(ctx.client.calls("change_password").await, 1);
    }
}
