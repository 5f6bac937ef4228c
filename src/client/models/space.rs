//! Personal space models: saved recommendations, notes and skills

use serde::{Deserialize, Serialize};

/// A saved career recommendation with its notes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: i64,
    pub oasis_code: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub main_duties: Option<String>,
    #[serde(default)]
    pub role_creativity: Option<f64>,
    #[serde(default)]
    pub role_leadership: Option<f64>,
    #[serde(default)]
    pub role_digital_literacy: Option<f64>,
    #[serde(default)]
    pub role_critical_thinking: Option<f64>,
    #[serde(default)]
    pub role_problem_solving: Option<f64>,
    pub saved_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_comparison: Option<SkillComparison>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// Payload for saving a recommendation
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewRecommendation {
    pub oasis_code: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_duties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_creativity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_leadership: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_digital_literacy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_critical_thinking: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_problem_solving: Option<f64>,
}

/// A free-form note, optionally attached to a saved recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub saved_recommendation_id: Option<i64>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for `POST /space/notes`
#[derive(Debug, Clone, Serialize)]
pub struct NoteCreate {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_recommendation_id: Option<i64>,
}

/// Payload for `PUT /space/notes/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct NoteUpdate {
    pub content: String,
}

/// Self-assessed skill levels on a 0 to 5 scale
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSkills {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creativity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leadership: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital_literacy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_thinking: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_solving: Option<f64>,
}

impl UserSkills {
    pub fn is_empty(&self) -> bool {
        self.creativity.is_none()
            && self.leadership.is_none()
            && self.digital_literacy.is_none()
            && self.critical_thinking.is_none()
            && self.problem_solving.is_none()
    }
}

/// User level against role level for one skill
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillPair {
    #[serde(default)]
    pub user_skill: Option<f64>,
    #[serde(default)]
    pub role_skill: Option<f64>,
}

/// Per-skill comparison between the student and a role
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillComparison {
    #[serde(default)]
    pub creativity: SkillPair,
    #[serde(default)]
    pub leadership: SkillPair,
    #[serde(default)]
    pub digital_literacy: SkillPair,
    #[serde(default)]
    pub critical_thinking: SkillPair,
    #[serde(default)]
    pub problem_solving: SkillPair,
}

impl SkillComparison {
    /// Skill name paired with its comparison, in display order
    pub fn rows(&self) -> [(&'static str, &SkillPair); 5] {
        [
            ("Creativity", &self.creativity),
            ("Leadership", &self.leadership),
            ("Digital literacy", &self.digital_literacy),
            ("Critical thinking", &self.critical_thinking),
            ("Problem solving", &self.problem_solving),
        ]
    }
}
