//! Peer messaging models

use serde::{Deserialize, Serialize};

/// A direct message between two students
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub sender_id: i64,
    pub recipient_id: i64,
    pub body: String,
    /// ISO 8601 timestamp as sent by the backend
    pub timestamp: String,
}

/// Payload for `POST /messages`
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub recipient_id: i64,
    pub body: String,
}

/// Summary of one conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationPreview {
    pub peer_id: i64,
    #[serde(default)]
    pub peer_name: Option<String>,
    pub last_message: String,
    pub timestamp: String,
    #[serde(default)]
    pub unread_count: u32,
}
