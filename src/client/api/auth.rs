//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{TokenResponse, UserOut};
use crate::error::Result;

/// Login and registration. Neither call sends a bearer token.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for an access token
    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse>;

    /// Create a new account
    async fn register(&self, username: &str, email: &str, password: &str) -> Result<UserOut>;
}
