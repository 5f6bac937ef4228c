//! Peer chat and mentor chat

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::{Message, PeerProfile};
use crate::client::{ChatApi, MessageApi, UserApi};
use crate::error::{Error, Result};
use crate::output::formatters::format_timestamp;
use crate::output::{format_json, format_json_list};

/// Render one conversation as chat lines, marking the user's own messages
pub fn format_conversation(messages: &[Message], me: i64, peer: &PeerProfile) -> String {
    let mut lines = Vec::with_capacity(messages.len() + 2);

    let mut header = format!("Chat with {}", peer.display_name().bold());
    let details: Vec<String> = [
        peer.major.clone(),
        peer.year.map(|y| format!("year {}", y)),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !details.is_empty() {
        header.push_str(&format!(" ({})", details.join(", ")));
    }
    lines.push(header);
    lines.push(String::new());

    if messages.is_empty() {
        lines.push("No messages yet. Say hello with --send.".dimmed().to_string());
    }

    for message in messages {
        let author = if message.sender_id == me {
            "You".green().bold()
        } else {
            peer.display_name().cyan().bold()
        };
        lines.push(format!(
            "[{}] {}: {}",
            format_timestamp(&message.timestamp).dimmed(),
            author,
            message.body
        ));
    }

    lines.join("\n")
}

/// Show the conversation with a peer, sending a message first when given
pub async fn peer<C: MessageApi + UserApi>(
    ctx: &CommandContext<C>,
    peer_id: i64,
    limit: u32,
    send: Option<String>,
) -> Result<()> {
    if send.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(Error::View("Message cannot be empty".to_string()));
    }

    ctx.guarded()?;

    if let Some(text) = send {
        ctx.load(
            "Failed to send message",
            ctx.client.send_message(peer_id, text.trim()),
        )
        .await?;
        log::debug!("Message sent to {}", peer_id);
    }

    let me = ctx
        .load("Failed to load user information", ctx.client.current_user())
        .await?;
    let profile = ctx
        .load(
            "Failed to load peer profile",
            ctx.client.user_profile(peer_id),
        )
        .await?;
    let messages = ctx
        .load(
            "Failed to load messages",
            ctx.client.conversation(peer_id, limit),
        )
        .await?;

    let out = match ctx.format {
        OutputFormat::Table => format_conversation(&messages, me.id, &profile),
        OutputFormat::Json => format_json_list(&messages)?,
    };
    println!("{}", out);
    Ok(())
}

/// Send one message to the Socratic mentor
pub async fn mentor<C: ChatApi>(ctx: &CommandContext<C>, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::View("Message cannot be empty".to_string()));
    }

    ctx.guarded()?;

    let reply = ctx
        .load(
            "Failed to reach the mentor. Please try again.",
            ctx.client.send_chat(text.trim()),
        )
        .await?;

    match ctx.format {
        OutputFormat::Table => println!("{} {}", "Mentor:".cyan().bold(), reply.text),
        OutputFormat::Json => println!("{}", format_json(&reply)?),
    }
    Ok(())
}

/// Clear the mentor conversation history
pub async fn clear_mentor<C: ChatApi>(ctx: &CommandContext<C>) -> Result<()> {
    ctx.guarded()?;

    let response = ctx
        .load(
            "Failed to clear conversation history",
            ctx.client.clear_chat(),
        )
        .await?;

    if response.success {
        println!("{} {}", "✓".green(), response.message);
        Ok(())
    } else {
        Err(Error::View(response.message))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::MockOrientorClient;
    use crate::client::models::CurrentUser;
    use crate::error::ApiError;
    use crate::session::{MemorySessionStore, RecordingNavigator};

    fn grace() -> PeerProfile {
        PeerProfile {
            user_id: 3,
            name: Some("Grace".to_string()),
            major: Some("Mathematics".to_string()),
            year: Some(3),
            hobbies: None,
            interests: None,
        }
    }

    async fn signed_in(client: MockOrientorClient) -> CommandContext<MockOrientorClient> {
        let client = client
            .with_current_user(CurrentUser {
                id: 1,
                email: "ada@example.com".to_string(),
            })
            .await
            .with_peer_profiles(vec![grace()])
            .await;
        CommandContext::from_parts(
            client,
            Arc::new(MemorySessionStore::with_token("abc123")),
            Arc::new(RecordingNavigator::new()),
        )
    }

    #[test]
    fn test_format_conversation_marks_own_messages() {
        colored::control::set_override(false);
        let messages = vec![
            Message {
                message_id: 1,
                sender_id: 1,
                recipient_id: 3,
                body: "Hi Grace".to_string(),
                timestamp: "2025-03-01T10:00:00".to_string(),
            },
            Message {
                message_id: 2,
                sender_id: 3,
                recipient_id: 1,
                body: "Hello!".to_string(),
                timestamp: "2025-03-01T10:01:00".to_string(),
            },
        ];

        let out = format_conversation(&messages, 1, &grace());

        assert!(out.starts_with("Chat with Grace (Mathematics, year 3)"));
        assert!(out.contains("[2025-03-01 10:00] You: Hi Grace"));
        assert!(out.contains("[2025-03-01 10:01] Grace: Hello!"));
    }

    #[tokio::test]
    async fn test_send_then_refresh() {
        let ctx = signed_in(MockOrientorClient::new()).await;

        peer(&ctx, 3, 20, Some(" Hi Grace ".to_string()))
            .await
            .unwrap();

        assert_eq!(
            ctx.client.sent_messages().await,
            vec![(3, "Hi Grace".to_string())]
        );
        assert_eq!(ctx.client.calls("conversation").await, 1);
    }

    #[tokio::test]
    async fn test_blank_message_rejected_locally() {
        let ctx = signed_in(MockOrientorClient::new()).await;
        assert!(peer(&ctx, 3, 20, Some("   ".to_string())).await.is_err());
        assert_eq!(ctx.client.total_calls().await, 0);
    }

    #[tokio::test]
    async fn test_unknown_peer_shows_detail() {
        let ctx = signed_in(MockOrientorClient::new()).await;
        let err = peer(&ctx, 99, 20, None).await.unwrap_err();
        assert_eq!(err.to_string(), "Profile not found");
    }

    #[tokio::test]
    async fn test_send_failure_stops_before_refresh() {
        let client = MockOrientorClient::new()
            .with_error(ApiError::RequestFailed {
                status: 500,
                detail: None,
            })
            .await;
        let ctx = signed_in(client).await;

        let err = peer(&ctx, 3, 20, Some("hello".to_string()))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to send message");
        assert_eq!(ctx.client.calls("conversation").await, 0);
    }

    #[tokio::test]
    async fn test_mentor_and_clear() {
        let ctx = signed_in(MockOrientorClient::new()).await;

        mentor(&ctx, "biology").await.unwrap();
        clear_mentor(&ctx).await.unwrap();

        assert_eq!(ctx.client.calls("send_chat").await, 1);
        assert_eq!(ctx.client.calls("clear_chat").await, 1);
    }
}
