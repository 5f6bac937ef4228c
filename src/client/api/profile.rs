//! Profile API trait

use async_trait::async_trait;

use crate::client::models::{Profile, ProfileUpdate};
use crate::error::Result;

#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn my_profile(&self) -> Result<Profile>;

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile>;
}
