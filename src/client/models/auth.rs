//! Authentication models

use serde::{Deserialize, Serialize};

/// Credentials for `POST /users/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account creation payload for `POST /users/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Bearer token issued on login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The opaque access token
    pub access_token: String,

    /// Token type, always "bearer" in practice
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}
