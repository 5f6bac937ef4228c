//! Account API trait

use async_trait::async_trait;

use crate::client::models::{AccountUpdate, CurrentUser, PeerProfile, UserOut};
use crate::error::Result;

#[async_trait]
pub trait UserApi: Send + Sync {
    /// Identity of the signed-in user
    async fn current_user(&self) -> Result<CurrentUser>;

    /// Public profile of any user
    async fn user_profile(&self, user_id: i64) -> Result<PeerProfile>;

    /// Change username, email or password
    async fn update_account(&self, update: &AccountUpdate) -> Result<UserOut>;

    /// Change password after verifying the old one
    async fn change_password(&self, old_password: &str, new_password: &str) -> Result<()>;
}
