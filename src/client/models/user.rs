//! Account models

use serde::{Deserialize, Serialize};

/// Account returned by register and update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserOut {
    pub id: i64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Identity of the signed-in user (`GET /users/me`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
}

/// Partial account update; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl AccountUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Password change payload
#[derive(Debug, Clone, Serialize)]
pub struct PasswordUpdate {
    pub old_password: String,
    pub new_password: String,
}
