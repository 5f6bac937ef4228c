//! Mock Orientor API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{
    AuthApi, ChatApi, MessageApi, PeerApi, ProfileApi, ResumeApi, SearchApi, SpaceApi, UserApi,
};
use super::models::{
    AccountUpdate, ChatReply, ClearHistoryResponse, ConversationPreview, CreatedResume,
    CurrentUser, Message, NewRecommendation, Note, NoteCreate, PeerProfile, Profile,
    ProfileUpdate, Recommendation, ResumeList, SearchResponse, SkillComparison, SuggestedPeer,
    TokenResponse, UserOut, UserSkills,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockOrientorClient::new()
///     .with_peers(vec![peer])
///     .await;
///
/// let peers = mock.suggested_peers(5).await?;
/// assert_eq!(peers.len(), 1);
/// ```
#[derive(Default)]
pub struct MockOrientorClient {
    state: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    token: Option<String>,
    current_user: Option<CurrentUser>,
    profile: Profile,
    peer_profiles: Vec<PeerProfile>,
    peers: Vec<SuggestedPeer>,
    conversations: Vec<ConversationPreview>,
    messages: Vec<Message>,
    recommendations: Vec<Recommendation>,
    notes: Vec<Note>,
    resumes: ResumeList,
    created_resume: Option<CreatedResume>,
    search: Option<SearchResponse>,
    /// Error to return (if any) - consumed on first use
    error: Option<ApiError>,
    /// Errors for one method only, each consumed on first use
    method_errors: HashMap<&'static str, ApiError>,
    /// Calls per method, for verification
    calls: HashMap<&'static str, usize>,
    /// Bodies of sent direct messages
    sent_messages: Vec<(i64, String)>,
}

impl MockOrientorClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_token(self, token: &str) -> Self {
        self.state.lock().await.token = Some(token.to_string());
        self
    }

    pub async fn with_current_user(self, user: CurrentUser) -> Self {
        self.state.lock().await.current_user = Some(user);
        self
    }

    pub async fn with_profile(self, profile: Profile) -> Self {
        self.state.lock().await.profile = profile;
        self
    }

    pub async fn with_peer_profiles(self, profiles: Vec<PeerProfile>) -> Self {
        self.state.lock().await.peer_profiles = profiles;
        self
    }

    pub async fn with_peers(self, peers: Vec<SuggestedPeer>) -> Self {
        self.state.lock().await.peers = peers;
        self
    }

    pub async fn with_conversations(self, conversations: Vec<ConversationPreview>) -> Self {
        self.state.lock().await.conversations = conversations;
        self
    }

    pub async fn with_messages(self, messages: Vec<Message>) -> Self {
        self.state.lock().await.messages = messages;
        self
    }

    pub async fn with_recommendations(self, recs: Vec<Recommendation>) -> Self {
        self.state.lock().await.recommendations = recs;
        self
    }

    pub async fn with_resumes(self, resumes: ResumeList) -> Self {
        self.state.lock().await.resumes = resumes;
        self
    }

    pub async fn with_created_resume(self, created: CreatedResume) -> Self {
        self.state.lock().await.created_resume = Some(created);
        self
    }

    pub async fn with_search(self, response: SearchResponse) -> Self {
        self.state.lock().await.search = Some(response);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        self.state.lock().await.error = Some(error);
        self
    }

    /// Configure an error for the next call to `method` only.
    pub async fn with_error_on(self, method: &'static str, error: ApiError) -> Self {
        self.state.lock().await.method_errors.insert(method, error);
        self
    }

    /// Number of calls made to one method
    pub async fn calls(&self, method: &str) -> usize {
        self.state
            .lock()
            .await
            .calls
            .get(method)
            .copied()
            .unwrap_or(0)
    }

    /// Total number of API calls made.
    pub async fn total_calls(&self) -> usize {
        self.state.lock().await.calls.values().sum()
    }

    /// Direct messages sent through the mock
    pub async fn sent_messages(&self) -> Vec<(i64, String)> {
        self.state.lock().await.sent_messages.clone()
    }

    /// Record the call, then return the pending error if there is one.
    async fn record(&self, method: &'static str) -> Result<tokio::sync::MutexGuard<'_, MockState>> {
        let mut state = self.state.lock().await;
        *state.calls.entry(method).or_insert(0) += 1;
        if let Some(e) = state.error.take() {
            return Err(e.into());
        }
        if let Some(e) = state.method_errors.remove(method) {
            return Err(e.into());
        }
        Ok(state)
    }
}

fn not_found(what: &str) -> crate::error::Error {
    ApiError::RequestFailed {
        status: 404,
        detail: Some(format!("{} not found", what)),
    }
    .into()
}

// ============================================================================
// AuthApi / UserApi Implementation
// ============================================================================

#[async_trait]
impl AuthApi for MockOrientorClient {
    async fn login(&self, _email: &str, _password: &str) -> Result<TokenResponse> {
        let state = self.record("login").await?;
        Ok(TokenResponse {
            access_token: state
                .token
                .clone()
                .unwrap_or_else(|| "mock-access-token".to_string()),
            token_type: "bearer".to_string(),
        })
    }

    async fn register(&self, username: &str, email: &str, _password: &str) -> Result<UserOut> {
        self.record("register").await?;
        Ok(UserOut {
            id: 1,
            email: email.to_string(),
            username: Some(username.to_string()),
        })
    }
}

#[async_trait]
impl UserApi for MockOrientorClient {
    async fn current_user(&self) -> Result<CurrentUser> {
        let state = self.record("current_user").await?;
        state.current_user.clone().ok_or_else(|| not_found("User"))
    }

    async fn user_profile(&self, user_id: i64) -> Result<PeerProfile> {
        let state = self.record("user_profile").await?;
        state
            .peer_profiles
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned()
            .ok_or_else(|| not_found("Profile"))
    }

    async fn update_account(&self, update: &AccountUpdate) -> Result<UserOut> {
        let state = self.record("update_account").await?;
        let current = state.current_user.clone().ok_or_else(|| not_found("User"))?;
        Ok(UserOut {
            id: current.id,
            email: update.email.clone().unwrap_or(current.email),
            username: update.username.clone(),
        })
    }

    async fn change_password(&self, _old: &str, _new: &str) -> Result<()> {
        self.record("change_password").await?;
        Ok(())
    }
}

// ============================================================================
// ProfileApi / PeerApi / MessageApi / ChatApi Implementation
// ============================================================================

#[async_trait]
impl ProfileApi for MockOrientorClient {
    async fn my_profile(&self) -> Result<Profile> {
        let state = self.record("my_profile").await?;
        Ok(state.profile.clone())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile> {
        let mut state = self.record("update_profile").await?;
        let profile = &mut state.profile;
        if let Some(v) = &update.favorite_movie {
            profile.favorite_movie = Some(v.clone());
        }
        if let Some(v) = &update.favorite_book {
            profile.favorite_book = Some(v.clone());
        }
        if let Some(v) = &update.favorite_celebrities {
            profile.favorite_celebrities = Some(v.clone());
        }
        if let Some(v) = &update.learning_style {
            profile.learning_style = Some(v.clone());
        }
        if let Some(v) = &update.interests {
            profile.interests = Some(v.clone());
        }
        Ok(profile.clone())
    }
}

#[async_trait]
impl PeerApi for MockOrientorClient {
    async fn suggested_peers(&self, limit: u32) -> Result<Vec<SuggestedPeer>> {
        let state = self.record("suggested_peers").await?;
        Ok(state.peers.iter().take(limit as usize).cloned().collect())
    }
}

#[async_trait]
impl MessageApi for MockOrientorClient {
    async fn send_message(&self, recipient_id: i64, body: &str) -> Result<Message> {
        let mut state = self.record("send_message").await?;
        state.sent_messages.push((recipient_id, body.to_string()));
        let sender_id = state.current_user.as_ref().map(|u| u.id).unwrap_or(1);
        let message = Message {
            message_id: state.messages.len() as i64 + 1,
            sender_id,
            recipient_id,
            body: body.to_string(),
            timestamp: "2025-03-01T10:00:00".to_string(),
        };
        state.messages.push(message.clone());
        Ok(message)
    }

    async fn conversation(&self, peer_id: i64, limit: u32) -> Result<Vec<Message>> {
        let state = self.record("conversation").await?;
        Ok(state
            .messages
            .iter()
            .filter(|m| m.sender_id == peer_id || m.recipient_id == peer_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn conversations(&self) -> Result<Vec<ConversationPreview>> {
        let state = self.record("conversations").await?;
        Ok(state.conversations.clone())
    }
}

#[async_trait]
impl ChatApi for MockOrientorClient {
    async fn send_chat(&self, text: &str) -> Result<ChatReply> {
        self.record("send_chat").await?;
        Ok(ChatReply {
            text: format!("What draws you to {}?", text),
            is_user: false,
        })
    }

    async fn clear_chat(&self) -> Result<ClearHistoryResponse> {
        self.record("clear_chat").await?;
        Ok(ClearHistoryResponse {
            success: true,
            message: "Conversation history cleared".to_string(),
        })
    }
}

// ============================================================================
// SearchApi / SpaceApi / ResumeApi Implementation
// ============================================================================

#[async_trait]
impl SearchApi for MockOrientorClient {
    async fn search(&self, query: &str, _top_k: u32) -> Result<SearchResponse> {
        let state = self.record("search").await?;
        Ok(state.search.clone().unwrap_or_else(|| SearchResponse {
            query: query.to_string(),
            results: Vec::new(),
        }))
    }
}

#[async_trait]
impl SpaceApi for MockOrientorClient {
    async fn recommendations(&self) -> Result<Vec<Recommendation>> {
        let state = self.record("recommendations").await?;
        Ok(state.recommendations.clone())
    }

    async fn save_recommendation(&self, rec: &NewRecommendation) -> Result<Recommendation> {
        let mut state = self.record("save_recommendation").await?;
        let saved = Recommendation {
            id: state.recommendations.len() as i64 + 1,
            oasis_code: rec.oasis_code.clone(),
            label: rec.label.clone(),
            description: rec.description.clone(),
            main_duties: rec.main_duties.clone(),
            role_creativity: rec.role_creativity,
            role_leadership: rec.role_leadership,
            role_digital_literacy: rec.role_digital_literacy,
            role_critical_thinking: rec.role_critical_thinking,
            role_problem_solving: rec.role_problem_solving,
            saved_at: "2025-03-01T10:00:00".to_string(),
            skill_comparison: None,
            notes: Vec::new(),
        };
        state.recommendations.push(saved.clone());
        Ok(saved)
    }

    async fn delete_recommendation(&self, id: i64) -> Result<()> {
        let mut state = self.record("delete_recommendation").await?;
        let before = state.recommendations.len();
        state.recommendations.retain(|r| r.id != id);
        if state.recommendations.len() == before {
            return Err(not_found("Recommendation"));
        }
        Ok(())
    }

    async fn notes(&self, recommendation_id: Option<i64>) -> Result<Vec<Note>> {
        let state = self.record("notes").await?;
        Ok(state
            .notes
            .iter()
            .filter(|n| recommendation_id.is_none() || n.saved_recommendation_id == recommendation_id)
            .cloned()
            .collect())
    }

    async fn create_note(&self, note: &NoteCreate) -> Result<Note> {
        let mut state = self.record("create_note").await?;
        let created = Note {
            id: state.notes.len() as i64 + 1,
            content: note.content.clone(),
            saved_recommendation_id: note.saved_recommendation_id,
            created_at: "2025-03-01T10:00:00".to_string(),
            updated_at: None,
        };
        state.notes.push(created.clone());
        Ok(created)
    }

    async fn update_note(&self, id: i64, content: &str) -> Result<Note> {
        let mut state = self.record("update_note").await?;
        let note = state
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| not_found("Note"))?;
        note.content = content.to_string();
        note.updated_at = Some("2025-03-02T10:00:00".to_string());
        Ok(note.clone())
    }

    async fn delete_note(&self, id: i64) -> Result<()> {
        let mut state = self.record("delete_note").await?;
        let before = state.notes.len();
        state.notes.retain(|n| n.id != id);
        if state.notes.len() == before {
            return Err(not_found("Note"));
        }
        Ok(())
    }

    async fn update_skills(&self, skills: &UserSkills) -> Result<UserSkills> {
        self.record("update_skills").await?;
        Ok(skills.clone())
    }

    async fn skill_comparison(&self, _oasis_code: &str) -> Result<SkillComparison> {
        self.record("skill_comparison").await?;
        Ok(SkillComparison::default())
    }
}

#[async_trait]
impl ResumeApi for MockOrientorClient {
    async fn list_resumes(&self) -> Result<ResumeList> {
        let state = self.record("list_resumes").await?;
        Ok(state.resumes.clone())
    }

    async fn create_resume(&self) -> Result<CreatedResume> {
        let state = self.record("create_resume").await?;
        Ok(state.created_resume.clone().unwrap_or(CreatedResume {
            edit_url: Some("resume/editor/new-resume".to_string()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_is_consumed_once() {
        let mock = MockOrientorClient::new()
            .with_error(ApiError::Unauthorized)
            .await;

        assert!(mock.my_profile().await.is_err());
        assert!(mock.my_profile().await.is_ok());
        assert_eq!(mock.calls("my_profile").await, 2);
    }

    #[tokio::test]
    async fn test_notes_crud() {
        let mock = MockOrientorClient::new();
        let note = mock
            .create_note(&NoteCreate {
                content: "Ask about co-op".to_string(),
                saved_recommendation_id: Some(1),
            })
            .await
            .unwrap();

        mock.update_note(note.id, "Ask about internships").await.unwrap();
        let notes = mock.notes(Some(1)).await.unwrap();
        assert_eq!(notes[0].content, "Ask about internships");

        mock.delete_note(note.id).await.unwrap();
        assert!(mock.delete_note(note.id).await.is_err());
        assert_eq!(mock.total_calls().await, 5);
    }
}
