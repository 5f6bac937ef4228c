//! Career search API trait

use async_trait::async_trait;

use crate::client::models::SearchResponse;
use crate::error::Result;

/// Vector search over occupations. Public; no bearer token is sent.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, query: &str, top_k: u32) -> Result<SearchResponse>;
}
