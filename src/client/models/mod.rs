//! Orientor API data models
//!
//! The backend owns every schema. Fields the client does not need to identify
//! a resource are optional, so missing values never fail a request.

mod auth;
mod chat;
mod message;
mod peer;
mod profile;
mod resume;
mod search;
mod space;
mod user;

pub use auth::{LoginRequest, RegisterRequest, TokenResponse};
pub use chat::{ChatReply, ChatRequest, ClearHistoryResponse};
pub use message::{ConversationPreview, Message, SendMessageRequest};
pub use peer::{PeerProfile, SuggestedPeer};
pub use profile::{Profile, ProfileUpdate};
pub use resume::{CreatedResume, ResumeList, ResumeSummary};
pub use search::{SearchRequest, SearchResponse, SearchResult};
pub use space::{
    NewRecommendation, Note, NoteCreate, NoteUpdate, Recommendation, SkillComparison, SkillPair,
    UserSkills,
};
pub use user::{AccountUpdate, CurrentUser, PasswordUpdate, UserOut};
