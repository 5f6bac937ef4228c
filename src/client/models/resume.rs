//! Resume builder models

use serde::{Deserialize, Serialize};

/// A resume stored in the resume editor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSummary {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Response of `GET /resume/list`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeList {
    #[serde(default)]
    pub resumes: Vec<ResumeSummary>,
}

/// Response of `POST /resume/create`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResume {
    /// Editor path relative to the resume editor address
    #[serde(default)]
    pub edit_url: Option<String>,
}
