//! Mentor chat API trait

use async_trait::async_trait;

use crate::client::models::{ChatReply, ClearHistoryResponse};
use crate::error::Result;

#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn send_chat(&self, text: &str) -> Result<ChatReply>;

    async fn clear_chat(&self) -> Result<ClearHistoryResponse>;
}
