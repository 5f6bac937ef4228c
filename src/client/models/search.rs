//! Career recommendation search models

use serde::{Deserialize, Serialize};

/// Query for `POST /vector/search`
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub top_k: u32,
}

/// One matching occupation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub score: f64,
    pub oasis_code: String,
    pub label: String,
    #[serde(default)]
    pub lead_statement: Option<String>,
    #[serde(default)]
    pub main_duties: Option<String>,
    #[serde(default)]
    pub creativity: Option<f64>,
    #[serde(default)]
    pub leadership: Option<f64>,
    #[serde(default)]
    pub digital_literacy: Option<f64>,
    #[serde(default)]
    pub critical_thinking: Option<f64>,
    #[serde(default)]
    pub problem_solving: Option<f64>,
}

/// Search results envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}
