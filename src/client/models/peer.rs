//! Peer models

use serde::{Deserialize, Serialize};

/// Public profile of another student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerProfile {
    pub user_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub hobbies: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
}

impl PeerProfile {
    /// Name to show, falling back to `User <id>`
    pub fn display_name(&self) -> String {
        display_name(self.name.as_deref(), self.user_id)
    }
}

/// A peer suggested by profile similarity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedPeer {
    pub user_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    /// Similarity score in `0.0..=1.0`
    pub similarity: f64,
    #[serde(default)]
    pub hobbies: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
}

impl SuggestedPeer {
    pub fn display_name(&self) -> String {
        display_name(self.name.as_deref(), self.user_id)
    }

    /// Similarity as a whole percentage, e.g. `87%`
    pub fn similarity_percent(&self) -> String {
        format!("{}%", (self.similarity * 100.0).round() as i64)
    }
}

fn display_name(name: Option<&str>, user_id: i64) -> String {
    match name {
        Some(n) if !n.trim().is_empty() => n.to_string(),
        _ => format!("User {user_id}"),
    }
}
