//! Resume builder API trait

use async_trait::async_trait;

use crate::client::models::{CreatedResume, ResumeList};
use crate::error::Result;

#[async_trait]
pub trait ResumeApi: Send + Sync {
    async fn list_resumes(&self) -> Result<ResumeList>;

    /// Create a resume prefilled from the student's profile
    async fn create_resume(&self) -> Result<CreatedResume>;
}
