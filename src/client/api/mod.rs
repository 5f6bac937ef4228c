//! API trait definitions split by responsibility
//!
//! Each page of the Orientor client talks to one slice of the backend:
//! - [`AuthApi`] - Login and registration (unauthenticated)
//! - [`UserApi`] - Current account and other users' public profiles
//! - [`ProfileApi`] - The signed-in student's profile
//! - [`PeerApi`] - Suggested peers
//! - [`MessageApi`] - Direct messages between students
//! - [`ChatApi`] - Socratic mentor chat
//! - [`SearchApi`] - Career recommendation search (unauthenticated)
//! - [`SpaceApi`] - Saved recommendations, notes and skills
//! - [`ResumeApi`] - Resume builder
//!
//! The [`OrientorApi`](super::OrientorApi) super-trait combines all of them.

mod auth;
mod chat;
mod message;
mod peer;
mod profile;
mod resume;
mod search;
mod space;
mod user;

pub use auth::AuthApi;
pub use chat::ChatApi;
pub use message::MessageApi;
pub use peer::PeerApi;
pub use profile::ProfileApi;
pub use resume::ResumeApi;
pub use search::SearchApi;
pub use space::SpaceApi;
pub use user::UserApi;
