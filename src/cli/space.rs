//! Personal space: saved recommendations, notes and skills

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, OutputFormat, SaveRecommendationArgs, SkillArgs};
use crate::client::SpaceApi;
use crate::client::models::{
    NewRecommendation, Note, NoteCreate, Recommendation, SkillComparison, UserSkills,
};
use crate::error::{Error, Result};
use crate::output::formatters::{format_level, format_timestamp, truncate};
use crate::output::{format_json, format_table, render_item, render_list};

#[derive(Tabled, Serialize)]
struct RecommendationDisplay {
    #[tabled(rename = "ID")]
    id: i64,

    #[tabled(rename = "CODE")]
    oasis_code: String,

    #[tabled(rename = "OCCUPATION")]
    label: String,

    #[tabled(rename = "SAVED")]
    saved_at: String,

    #[tabled(rename = "NOTES")]
    notes: usize,
}

impl From<&Recommendation> for RecommendationDisplay {
    fn from(r: &Recommendation) -> Self {
        Self {
            id: r.id,
            oasis_code: r.oasis_code.clone(),
            label: r.label.clone(),
            saved_at: format_timestamp(&r.saved_at),
            notes: r.notes.len(),
        }
    }
}

#[derive(Tabled, Serialize)]
struct NoteDisplay {
    #[tabled(rename = "ID")]
    id: i64,

    #[tabled(rename = "RECOMMENDATION")]
    recommendation: String,

    #[tabled(rename = "NOTE")]
    content: String,

    #[tabled(rename = "UPDATED")]
    updated: String,
}

impl From<&Note> for NoteDisplay {
    fn from(n: &Note) -> Self {
        Self {
            id: n.id,
            recommendation: n
                .saved_recommendation_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            content: truncate(&n.content, 60),
            updated: format_timestamp(n.updated_at.as_deref().unwrap_or(&n.created_at)),
        }
    }
}

#[derive(Tabled, Serialize)]
struct SkillDisplay {
    #[tabled(rename = "SKILL")]
    skill: &'static str,

    #[tabled(rename = "YOU")]
    user: String,

    #[tabled(rename = "ROLE")]
    role: String,
}

impl From<SkillArgs> for UserSkills {
    fn from(args: SkillArgs) -> Self {
        Self {
            creativity: args.creativity,
            leadership: args.leadership,
            digital_literacy: args.digital_literacy,
            critical_thinking: args.critical_thinking,
            problem_solving: args.problem_solving,
        }
    }
}

fn non_empty(content: &str) -> Result<&str> {
    let content = content.trim();
    if content.is_empty() {
        return Err(Error::View("Note cannot be empty".to_string()));
    }
    Ok(content)
}

/// Skill comparison as a table
pub fn format_comparison(comparison: &SkillComparison) -> String {
    let rows: Vec<SkillDisplay> = comparison
        .rows()
        .into_iter()
        .map(|(skill, pair)| SkillDisplay {
            skill,
            user: format_level(pair.user_skill),
            role: format_level(pair.role_skill),
        })
        .collect();
    format_table(&rows)
}

/// List saved recommendations
pub async fn list<C: SpaceApi>(ctx: &CommandContext<C>) -> Result<()> {
    ctx.guarded()?;

    let recs = ctx
        .load(
            "Failed to load saved recommendations",
            ctx.client.recommendations(),
        )
        .await?;

    println!(
        "{}",
        render_list(&recs, ctx.format, |r| RecommendationDisplay::from(r))?
    );
    Ok(())
}

/// Save a recommendation to the space
pub async fn save<C: SpaceApi>(ctx: &CommandContext<C>, args: SaveRecommendationArgs) -> Result<()> {
    ctx.guarded()?;

    let rec = NewRecommendation {
        oasis_code: args.oasis_code,
        label: args.label,
        description: args.description,
        main_duties: args.main_duties,
        ..Default::default()
    };
    let saved = ctx
        .load(
            "Failed to save recommendation",
            ctx.client.save_recommendation(&rec),
        )
        .await?;

    let out = render_item(&saved, ctx.format, |r| {
        format!(
            "{} Saved {} ({}) as #{}",
            "✓".green(),
            r.label.bold(),
            r.oasis_code,
            r.id
        )
    })?;
    println!("{}", out);
    Ok(())
}

/// Remove a saved recommendation
pub async fn remove<C: SpaceApi>(ctx: &CommandContext<C>, id: i64) -> Result<()> {
    ctx.guarded()?;

    ctx.load(
        "Failed to remove recommendation",
        ctx.client.delete_recommendation(id),
    )
    .await?;

    println!("{} Removed recommendation #{}", "✓".green(), id);
    Ok(())
}

/// List notes, optionally for one saved recommendation
pub async fn notes<C: SpaceApi>(ctx: &CommandContext<C>, recommendation: Option<i64>) -> Result<()> {
    ctx.guarded()?;

    let notes = ctx
        .load("Failed to load notes", ctx.client.notes(recommendation))
        .await?;

    println!("{}", render_list(&notes, ctx.format, |n| NoteDisplay::from(n))?);
    Ok(())
}

/// Add a note
pub async fn add_note<C: SpaceApi>(
    ctx: &CommandContext<C>,
    content: &str,
    recommendation: Option<i64>,
) -> Result<()> {
    let content = non_empty(content)?;
    ctx.guarded()?;

    let note = NoteCreate {
        content: content.to_string(),
        saved_recommendation_id: recommendation,
    };
    let created = ctx
        .load("Failed to add note", ctx.client.create_note(&note))
        .await?;

    println!("{} Added note #{}", "✓".green(), created.id);
    Ok(())
}

/// Replace a note's text
pub async fn edit_note<C: SpaceApi>(ctx: &CommandContext<C>, id: i64, content: &str) -> Result<()> {
    let content = non_empty(content)?;
    ctx.guarded()?;

    ctx.load("Failed to update note", ctx.client.update_note(id, content))
        .await?;

    println!("{} Updated note #{}", "✓".green(), id);
    Ok(())
}

/// Delete a note
pub async fn remove_note<C: SpaceApi>(ctx: &CommandContext<C>, id: i64) -> Result<()> {
    ctx.guarded()?;

    ctx.load("Failed to delete note", ctx.client.delete_note(id))
        .await?;

    println!("{} Deleted note #{}", "✓".green(), id);
    Ok(())
}

/// Update the skill self-assessment
pub async fn skills<C: SpaceApi>(ctx: &CommandContext<C>, args: SkillArgs) -> Result<()> {
    let skills = UserSkills::from(args);
    if skills.is_empty() {
        return Err(Error::View(
            "Nothing to update. Pass at least one skill, e.g. --creativity 4".to_string(),
        ));
    }

    ctx.guarded()?;

    let updated = ctx
        .load("Failed to update skills", ctx.client.update_skills(&skills))
        .await?;

    println!("{} Skills updated", "✓".green());
    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&updated)?);
    }
    Ok(())
}

/// Compare the student's skills with an occupation's
pub async fn compare<C: SpaceApi>(ctx: &CommandContext<C>, oasis_code: &str) -> Result<()> {
    ctx.guarded()?;

    let comparison = ctx
        .load(
            "Failed to load skill comparison",
            ctx.client.skill_comparison(oasis_code),
        )
        .await?;

    println!(
        "{}",
        render_item(&comparison, ctx.format, format_comparison)?
    );
    Ok(())
}
