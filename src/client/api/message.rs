//! Direct messaging API trait

use async_trait::async_trait;

use crate::client::models::{ConversationPreview, Message};
use crate::error::Result;

#[async_trait]
pub trait MessageApi: Send + Sync {
    async fn send_message(&self, recipient_id: i64, body: &str) -> Result<Message>;

    /// Most recent messages exchanged with one peer
    async fn conversation(&self, peer_id: i64, limit: u32) -> Result<Vec<Message>>;

    /// One preview per peer the user has talked to
    async fn conversations(&self) -> Result<Vec<ConversationPreview>>;
}
