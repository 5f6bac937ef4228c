//! Career recommendation search
//!
//! Public: runs without a session and without the page guard.

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::SearchApi;
use crate::client::models::{SearchResponse, SearchResult};
use crate::error::{Error, Result};
use crate::output::formatters::{or_dash, truncate};
use crate::output::{format_json_list, format_table};
use crate::view::View;

/// Shown when the query is blank; no request is made
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query";

#[derive(Tabled, Serialize)]
struct SearchResultDisplay {
    #[tabled(rename = "#")]
    rank: usize,

    #[tabled(rename = "CODE")]
    oasis_code: String,

    #[tabled(rename = "OCCUPATION")]
    label: String,

    #[tabled(rename = "SCORE")]
    score: String,

    #[tabled(rename = "SUMMARY")]
    summary: String,
}

impl SearchResultDisplay {
    fn new(rank: usize, result: &SearchResult) -> Self {
        Self {
            rank,
            oasis_code: result.oasis_code.clone(),
            label: result.label.clone(),
            score: format!("{:.2}", result.score),
            summary: truncate(&or_dash(result.lead_statement.as_deref()), 60),
        }
    }
}

/// Validate the query and run the search through a view
pub async fn search<C: SearchApi>(
    ctx: &CommandContext<C>,
    query: &str,
    top_k: u32,
) -> Result<SearchResponse> {
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::View(EMPTY_QUERY_MESSAGE.to_string()));
    }

    let view =
        View::new("Failed to search. Please try again.").with_loading_message("Searching...");
    ctx.load_with(view, ctx.client.search(query, top_k)).await
}

pub async fn run<C: SearchApi>(ctx: &CommandContext<C>, query: &str, top_k: u32) -> Result<()> {
    let response = search(ctx, query, top_k).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json_list(&response.results)?),
        OutputFormat::Table => {
            let rows: Vec<SearchResultDisplay> = response
                .results
                .iter()
                .enumerate()
                .map(|(i, r)| SearchResultDisplay::new(i + 1, r))
                .collect();
            println!("{}", format_table(&rows));
            if let Some(first) = response.results.first() {
                println!(
                    "\nSave one to your space: {}",
                    format!(
                        "orientor space save {} --label \"{}\"",
                        first.oasis_code, first.label
                    )
                    .cyan()
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::MockOrientorClient;
    use crate::error::ApiError;
    use crate::session::{MemorySessionStore, RecordingNavigator};

    fn public_context(client: MockOrientorClient) -> CommandContext<MockOrientorClient> {
        CommandContext::from_parts(
            client,
            Arc::new(MemorySessionStore::new()),
            Arc::new(RecordingNavigator::new()),
        )
    }

    #[tokio::test]
    async fn test_blank_query_rejected_without_request() {
        let ctx = public_context(MockOrientorClient::new());

        let err = search(&ctx, "   ", 5).await.unwrap_err();

        assert_eq!(err.to_string(), EMPTY_QUERY_MESSAGE);
        assert_eq!(ctx.client.total_calls().await, 0);
    }

    #[tokio::test]
    async fn test_search_runs_without_session() {
        let client = MockOrientorClient::new()
            .with_search(SearchResponse {
                query: "nursing".to_string(),
                results: vec![SearchResult {
                    id: "31301.00".to_string(),
                    score: 0.91,
                    oasis_code: "31301.00".to_string(),
                    label: "Registered nurses".to_string(),
                    lead_statement: None,
                    main_duties: None,
                    creativity: None,
                    leadership: None,
                    digital_literacy: None,
                    critical_thinking: None,
                    problem_solving: None,
                }],
            })
            .await;
        let ctx = public_context(client);

        let response = search(&ctx, " nursing ", 5).await.unwrap();
        assert_eq!(response.results[0].label, "Registered nurses");
    }

    #[tokio::test]
    async fn test_search_failure_uses_fallback() {
        let client = MockOrientorClient::new()
            .with_error(ApiError::RequestFailed {
                status: 500,
                detail: None,
            })
            .await;
        let ctx = public_context(client);

        let err = search(&ctx, "nursing", 5).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to search. Please try again.");
    }
}
