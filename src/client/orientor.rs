//! Orientor API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{
    AuthApi, ChatApi, MessageApi, PeerApi, ProfileApi, ResumeApi, SearchApi, SpaceApi, UserApi,
};
use super::models::{
    AccountUpdate, ChatReply, ChatRequest, ClearHistoryResponse, ConversationPreview,
    CreatedResume, CurrentUser, LoginRequest, Message, NewRecommendation, Note, NoteCreate,
    NoteUpdate, PasswordUpdate, PeerProfile, Profile, ProfileUpdate, Recommendation,
    RegisterRequest, ResumeList, SearchRequest, SearchResponse, SendMessageRequest,
    SkillComparison, SuggestedPeer, TokenResponse, UserOut, UserSkills,
};
use crate::config::normalize_base_url;
use crate::error::{ApiError, Result};
use crate::session::SessionStore;

/// Whether a request carries the stored bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Bearer,
    Public,
}

/// Orientor API client
///
/// Reads the session store before every authenticated request. It never
/// clears the session itself; callers decide what a 401 means.
pub struct OrientorClient {
    http: HttpClient,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl OrientorClient {
    /// Create a client for `base_url`, which is trimmed of whitespace
    pub fn new(base_url: &str, session: Arc<dyn SessionStore>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: normalize_base_url(base_url),
            session,
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path; a missing leading slash is added
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Make an authenticated API request
    ///
    /// Attaches `Authorization: Bearer <token>` when a session exists, and a
    /// JSON body with `Content-Type: application/json` when `body` is set.
    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(method, path, body, Auth::Bearer).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.request::<(), ()>(Method::DELETE, path, None).await
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>, auth: Auth) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        log::debug!("{} {}", method, url);

        let mut builder = self.http.request(method.clone(), &url);

        if auth == Auth::Bearer {
            if let Some(token) = self.session.get() {
                builder = builder.header("Authorization", format!("Bearer {}", token));
            }
        }

        if let Some(body) = body {
            let payload = serde_json::to_vec(body)?;
            builder = builder
                .header("Content-Type", "application/json")
                .body(payload);
        }

        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status();
        log::debug!("{} {} -> {}", method, url, status);

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized.into());
        }

        let text = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                detail: extract_detail(&text),
            }
            .into());
        }

        // Empty bodies (204 on delete) decode as JSON null
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }
}

/// Pull the user-facing message out of an error body.
///
/// Handles `{"detail": "..."}` and validation errors of the form
/// `{"detail": [{"msg": "..."}, ...]}`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}

#[async_trait]
impl AuthApi for OrientorClient {
    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send(Method::POST, "/users/login", Some(&body), Auth::Public)
            .await
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<UserOut> {
        let body = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send(Method::POST, "/users/register", Some(&body), Auth::Public)
            .await
    }
}

#[async_trait]
impl UserApi for OrientorClient {
    async fn current_user(&self) -> Result<CurrentUser> {
        self.get("/users/me").await
    }

    async fn user_profile(&self, user_id: i64) -> Result<PeerProfile> {
        self.get(&format!("/users/{}/profile", user_id)).await
    }

    async fn update_account(&self, update: &AccountUpdate) -> Result<UserOut> {
        self.put("/users/update", update).await
    }

    async fn change_password(&self, old_password: &str, new_password: &str) -> Result<()> {
        let body = PasswordUpdate {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        let _: serde_json::Value = self.put("/users/change-password", &body).await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileApi for OrientorClient {
    async fn my_profile(&self) -> Result<Profile> {
        self.get("/profiles/me").await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile> {
        self.put("/profiles/update", update).await
    }
}

#[async_trait]
impl PeerApi for OrientorClient {
    async fn suggested_peers(&self, limit: u32) -> Result<Vec<SuggestedPeer>> {
        self.get(&format!("/peers/suggested?limit={}", limit)).await
    }
}

#[async_trait]
impl MessageApi for OrientorClient {
    async fn send_message(&self, recipient_id: i64, body: &str) -> Result<Message> {
        let request = SendMessageRequest {
            recipient_id,
            body: body.to_string(),
        };
        self.post("/messages", &request).await
    }

    async fn conversation(&self, peer_id: i64, limit: u32) -> Result<Vec<Message>> {
        self.get(&format!(
            "/messages/conversation/{}?limit={}",
            peer_id, limit
        ))
        .await
    }

    async fn conversations(&self) -> Result<Vec<ConversationPreview>> {
        self.get("/messages/conversations").await
    }
}

#[async_trait]
impl ChatApi for OrientorClient {
    async fn send_chat(&self, text: &str) -> Result<ChatReply> {
        let request = ChatRequest {
            text: text.to_string(),
        };
        self.post("/send", &request).await
    }

    async fn clear_chat(&self) -> Result<ClearHistoryResponse> {
        self.request::<_, ()>(Method::POST, "/clear", None).await
    }
}

#[async_trait]
impl SearchApi for OrientorClient {
    async fn search(&self, query: &str, top_k: u32) -> Result<SearchResponse> {
        let body = SearchRequest {
            query: query.to_string(),
            top_k,
        };
        self.send(Method::POST, "/vector/search", Some(&body), Auth::Public)
            .await
    }
}

#[async_trait]
impl SpaceApi for OrientorClient {
    async fn recommendations(&self) -> Result<Vec<Recommendation>> {
        self.get("/space/recommendations").await
    }

    async fn save_recommendation(&self, rec: &NewRecommendation) -> Result<Recommendation> {
        self.post("/space/recommendations", rec).await
    }

    async fn delete_recommendation(&self, id: i64) -> Result<()> {
        self.delete(&format!("/space/recommendations/{}", id)).await
    }

    async fn notes(&self, recommendation_id: Option<i64>) -> Result<Vec<Note>> {
        let path = match recommendation_id {
            Some(id) => format!("/space/notes?saved_recommendation_id={}", id),
            None => "/space/notes".to_string(),
        };
        self.get(&path).await
    }

    async fn create_note(&self, note: &NoteCreate) -> Result<Note> {
        self.post("/space/notes", note).await
    }

    async fn update_note(&self, id: i64, content: &str) -> Result<Note> {
        let body = NoteUpdate {
            content: content.to_string(),
        };
        self.put(&format!("/space/notes/{}", id), &body).await
    }

    async fn delete_note(&self, id: i64) -> Result<()> {
        self.delete(&format!("/space/notes/{}", id)).await
    }

    async fn update_skills(&self, skills: &UserSkills) -> Result<UserSkills> {
        self.put("/space/skills", skills).await
    }

    async fn skill_comparison(&self, oasis_code: &str) -> Result<SkillComparison> {
        self.get(&format!(
            "/space/recommendations/{}/skill-comparison",
            oasis_code
        ))
        .await
    }
}

#[async_trait]
impl ResumeApi for OrientorClient {
    async fn list_resumes(&self) -> Result<ResumeList> {
        let list: Option<ResumeList> = self.get("/resume/list").await?;
        Ok(list.unwrap_or_default())
    }

    async fn create_resume(&self) -> Result<CreatedResume> {
        self.post("/resume/create", &serde_json::json!({})).await
    }
}
