//! Suggested peers

use serde::Serialize;
use tabled::Tabled;

use crate::cli::CommandContext;
use crate::client::PeerApi;
use crate::client::models::SuggestedPeer;
use crate::error::Result;
use crate::output::formatters::{or_dash, truncate};
use crate::output::render_list;

/// Table row for one suggested peer
#[derive(Tabled, Serialize)]
pub struct PeerDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "MAJOR")]
    pub major: String,

    #[tabled(rename = "YEAR")]
    pub year: String,

    #[tabled(rename = "MATCH")]
    pub similarity: String,

    #[tabled(rename = "INTERESTS")]
    pub interests: String,
}

impl From<&SuggestedPeer> for PeerDisplay {
    fn from(peer: &SuggestedPeer) -> Self {
        Self {
            id: peer.user_id,
            name: peer.display_name(),
            major: or_dash(peer.major.as_deref()),
            year: peer
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string()),
            similarity: peer.similarity_percent(),
            interests: truncate(&or_dash(peer.interests.as_deref()), 40),
        }
    }
}

/// List peers with profiles similar to the signed-in student
pub async fn run<C: PeerApi>(ctx: &CommandContext<C>, limit: u32) -> Result<()> {
    ctx.guarded()?;

    let peers = ctx
        .load(
            "Failed to load suggested peers",
            ctx.client.suggested_peers(limit),
        )
        .await?;
    log::debug!("Fetched {} suggested peers", peers.len());

    println!("{}", render_list(&peers, ctx.format, |p| PeerDisplay::from(p))?);
    Ok(())
}
