use crate::model::{
    experience::{
        event::{
            CreateExperience, DeleteExperience, RepublishExperience, UpdateExperience,
            UpdateExperienceStatus,
        },
        Experience, ExperienceListOptions,
    },
    id::ExperienceId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create(&self, event: CreateExperience) -> AppResult<ExperienceId>;
    /// Partial field update; only the owning guide may mutate.
    async fn update(&self, event: UpdateExperience) -> AppResult<()>;
    /// Lifecycle transition guarded by `ExperienceStatus::can_transition_to`.
    async fn update_status(&self, event: UpdateExperienceStatus) -> AppResult<()>;
    /// Clones the experience as a fresh draft (new id, unbooked, zero rating).
    async fn republish(&self, event: RepublishExperience) -> AppResult<ExperienceId>;
    async fn delete(&self, event: DeleteExperience) -> AppResult<()>;
    async fn find_by_id(&self, experience_id: ExperienceId) -> AppResult<Option<Experience>>;
    /// Published experiences matching the search filters, soonest date first.
    async fn find_all(&self, options: ExperienceListOptions) -> AppResult<Vec<Experience>>;
}
