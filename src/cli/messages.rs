//! Conversation list

use chrono::Utc;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::{ConversationPreview, SuggestedPeer};
use crate::client::{MessageApi, PeerApi};
use crate::error::{ApiError, Error, Result};
use crate::output::formatters::{format_timestamp, truncate};
use crate::output::render_list;
use crate::session::Route;

/// Preview text for a peer without any messages
pub const NO_MESSAGES_YET: &str = "No messages yet";

/// Peers fetched when the conversation list is unavailable
const FALLBACK_PEER_LIMIT: u32 = 5;

#[derive(Tabled, Serialize)]
struct ConversationDisplay {
    #[tabled(rename = "PEER ID")]
    peer_id: i64,

    #[tabled(rename = "NAME")]
    name: String,

    #[tabled(rename = "LAST MESSAGE")]
    last_message: String,

    #[tabled(rename = "WHEN")]
    when: String,

    #[tabled(rename = "UNREAD")]
    unread: u32,
}

impl From<&ConversationPreview> for ConversationDisplay {
    fn from(c: &ConversationPreview) -> Self {
        Self {
            peer_id: c.peer_id,
            name: c
                .peer_name
                .clone()
                .unwrap_or_else(|| format!("User {}", c.peer_id)),
            last_message: truncate(&c.last_message, 50),
            when: format_timestamp(&c.timestamp),
            unread: c.unread_count,
        }
    }
}

/// Preview for a suggested peer the user has not talked to yet
pub fn preview_from_peer(peer: &SuggestedPeer, timestamp: &str) -> ConversationPreview {
    ConversationPreview {
        peer_id: peer.user_id,
        peer_name: Some(peer.display_name()),
        last_message: NO_MESSAGES_YET.to_string(),
        timestamp: timestamp.to_string(),
        unread_count: 0,
    }
}

/// Conversations, or suggested peers as empty conversations when the
/// conversation list cannot be loaded.
///
/// An expired session is never masked by the fallback.
pub async fn load_conversations<C>(client: &C) -> Result<Vec<ConversationPreview>>
where
    C: MessageApi + PeerApi,
{
    match client.conversations().await {
        Ok(conversations) => Ok(conversations),
        Err(Error::Api(ApiError::Unauthorized)) => Err(ApiError::Unauthorized.into()),
        Err(err) => {
            log::warn!(
                "Conversation list unavailable ({}), falling back to suggested peers",
                err
            );
            let peers = client.suggested_peers(FALLBACK_PEER_LIMIT).await?;
            let now = Utc::now().to_rfc3339();
            Ok(peers.iter().map(|p| preview_from_peer(p, &now)).collect())
        }
    }
}

/// List conversations with other students
pub async fn run<C: MessageApi + PeerApi>(ctx: &CommandContext<C>) -> Result<()> {
    ctx.guarded()?;

    let conversations = ctx
        .load(
            "Failed to load conversations",
            load_conversations(&ctx.client),
        )
        .await?;

    println!(
        "{}",
        render_list(&conversations, ctx.format, |c| ConversationDisplay::from(c))?
    );
    if let (OutputFormat::Table, Some(first)) = (ctx.format, conversations.first()) {
        println!(
            "\nOpen a conversation: {}",
            Route::Chat(first.peer_id).command().cyan()
        );
    }
    Ok(())
}
