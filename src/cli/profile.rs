//! Student profile commands

use colored::Colorize;

use crate::cli::{CommandContext, ProfileUpdateArgs};
use crate::client::ProfileApi;
use crate::client::models::{Profile, ProfileUpdate};
use crate::error::{Error, Result};
use crate::output::render_item;

impl From<ProfileUpdateArgs> for ProfileUpdate {
    fn from(args: ProfileUpdateArgs) -> Self {
        Self {
            favorite_movie: args.favorite_movie,
            favorite_book: args.favorite_book,
            favorite_celebrities: args.favorite_celebrities,
            learning_style: args.learning_style,
            interests: args.interests,
        }
    }
}

/// Human-readable profile; only fields that have a value are listed
pub fn describe(profile: &Profile) -> String {
    let fields = profile.present_fields();
    if fields.is_empty() {
        return format!(
            "Your profile is empty. Run {} to fill it in.",
            "orientor profile update".cyan()
        );
    }

    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    fields
        .iter()
        .map(|(label, value)| {
            let label = format!("{:<width$}", label, width = width);
            format!("{}  {}", label.bold(), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Show the signed-in student's profile
pub async fn show<C: ProfileApi>(ctx: &CommandContext<C>) -> Result<()> {
    ctx.guarded()?;

    let profile = ctx
        .load("Failed to load profile", ctx.client.my_profile())
        .await?;

    println!("{}", render_item(&profile, ctx.format, describe)?);
    Ok(())
}

/// Update profile fields given on the command line
pub async fn update<C: ProfileApi>(ctx: &CommandContext<C>, args: ProfileUpdateArgs) -> Result<()> {
    let update = ProfileUpdate::from(args);
    if update.is_empty() {
        return Err(Error::View(
            "Nothing to update. Pass at least one field, e.g. --interests".to_string(),
        ));
    }

    ctx.guarded()?;

    let profile = ctx
        .load("Update failed", ctx.client.update_profile(&update))
        .await?;

    println!("{} Profile updated", "✓".green());
    println!("{}", render_item(&profile, ctx.format, describe)?);
    Ok(())
}
