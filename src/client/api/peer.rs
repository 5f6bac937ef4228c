//! Peer suggestion API trait

use async_trait::async_trait;

use crate::client::models::SuggestedPeer;
use crate::error::Result;

#[async_trait]
pub trait PeerApi: Send + Sync {
    /// Peers ordered by descending similarity
    async fn suggested_peers(&self, limit: u32) -> Result<Vec<SuggestedPeer>>;
}
