//! Mentor chat models

use serde::{Deserialize, Serialize};

/// Message sent to the mentor (`POST /send`)
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Mentor reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    #[serde(default)]
    pub is_user: bool,
}

/// Result of clearing the mentor conversation (`POST /clear`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearHistoryResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
