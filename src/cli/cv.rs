//! Resume builder commands

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::ResumeApi;
use crate::client::models::{CreatedResume, ResumeSummary};
use crate::error::{ApiError, Error, Result};
use crate::output::formatters::{format_timestamp, or_dash};
use crate::output::{format_json, render_list};

/// Shown when the backend has no resume service behind it
pub const RESUME_SERVICE_UNAVAILABLE: &str =
    "Resume service is not available. Please make sure Reactive Resume is running.";

#[derive(Tabled, Serialize)]
struct ResumeDisplay {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "TITLE")]
    title: String,

    #[tabled(rename = "UPDATED")]
    updated: String,

    #[tabled(rename = "EDITOR")]
    editor: String,
}

/// Editor address for an existing resume
pub fn editor_url(resume_url: &str, resume_id: &str) -> String {
    format!("{}/resume/editor/{}", resume_url, resume_id)
}

/// Editor address for a freshly created resume
pub fn created_editor_url(resume_url: &str, created: &CreatedResume) -> Result<String> {
    match created.edit_url.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => {
            Ok(format!("{}/{}", resume_url, path.trim_start_matches('/')))
        }
        _ => Err(ApiError::InvalidResponse("Failed to get resume URL".to_string()).into()),
    }
}

async fn first_or_created<C: ResumeApi>(client: &C, resume_url: &str) -> Result<String> {
    let list = client.list_resumes().await?;
    if let Some(first) = list.resumes.first() {
        return Ok(editor_url(resume_url, &first.id));
    }

    log::debug!("No resumes yet, creating one");
    let created = client.create_resume().await?;
    created_editor_url(resume_url, &created)
}

/// Editor address for the user's resume, creating one when none exist.
///
/// A 404 from listing or creating means the resume service is missing.
/// Other non-session failures fall back to the editor's own address.
pub async fn resolve_editor_url<C: ResumeApi>(client: &C, resume_url: &str) -> Result<String> {
    match first_or_created(client, resume_url).await {
        Ok(url) => Ok(url),
        Err(Error::Api(ApiError::Unauthorized)) => Err(ApiError::Unauthorized.into()),
        Err(Error::Api(ApiError::RequestFailed { status: 404, .. })) => {
            Err(Error::View(RESUME_SERVICE_UNAVAILABLE.to_string()))
        }
        Err(err) => {
            log::warn!("Resume editor lookup failed ({}), opening the editor directly", err);
            Ok(resume_url.to_string())
        }
    }
}

/// List resumes with their editor addresses
pub async fn list<C: ResumeApi>(ctx: &CommandContext<C>) -> Result<()> {
    ctx.guarded()?;

    let list = ctx
        .load("Failed to load resumes", ctx.client.list_resumes())
        .await?;

    let out = render_list(&list.resumes, ctx.format, |r: &ResumeSummary| ResumeDisplay {
        id: r.id.clone(),
        title: or_dash(r.title.as_deref()),
        updated: r
            .updated_at
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string()),
        editor: editor_url(&ctx.resume_url, &r.id),
    })?;
    println!("{}", out);
    Ok(())
}

fn print_url(format: OutputFormat, url: &str) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{} {}", "Resume editor:".bold(), url.cyan()),
        OutputFormat::Json => println!(
            "{}",
            format_json(&serde_json::json!({ "editor_url": url }))?
        ),
    }
    Ok(())
}

/// Print the editor address of the user's resume
pub async fn open<C: ResumeApi>(ctx: &CommandContext<C>) -> Result<()> {
    ctx.guarded()?;

    let url = ctx
        .load(
            "Failed to access resume builder",
            resolve_editor_url(&ctx.client, &ctx.resume_url),
        )
        .await?;
    print_url(ctx.format, &url)
}

/// Create a new resume and print its editor address
pub async fn new<C: ResumeApi>(ctx: &CommandContext<C>) -> Result<()> {
    ctx.guarded()?;

    let created = ctx
        .load("Failed to create new resume", ctx.client.create_resume())
        .await?;
    let url = created_editor_url(&ctx.resume_url, &created)?;

    println!("{} Resume created", "✓".green());
    print_url(ctx.format, &url)
}
