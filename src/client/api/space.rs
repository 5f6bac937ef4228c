//! Personal space API trait

use async_trait::async_trait;

use crate::client::models::{
    NewRecommendation, Note, NoteCreate, Recommendation, SkillComparison, UserSkills,
};
use crate::error::Result;

#[async_trait]
pub trait SpaceApi: Send + Sync {
    async fn recommendations(&self) -> Result<Vec<Recommendation>>;

    async fn save_recommendation(&self, rec: &NewRecommendation) -> Result<Recommendation>;

    async fn delete_recommendation(&self, id: i64) -> Result<()>;

    /// Notes, optionally restricted to one saved recommendation
    async fn notes(&self, recommendation_id: Option<i64>) -> Result<Vec<Note>>;

    async fn create_note(&self, note: &NoteCreate) -> Result<Note>;

    async fn update_note(&self, id: i64, content: &str) -> Result<Note>;

    async fn delete_note(&self, id: i64) -> Result<()>;

    async fn update_skills(&self, skills: &UserSkills) -> Result<UserSkills>;

    async fn skill_comparison(&self, oasis_code: &str) -> Result<SkillComparison>;
}
