use crate::model::id::{GuideId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

/// Guide profile linked 1:1 to a user account. `verified` gates every
/// experience-mutating operation.
#[derive(Debug, Clone)]
pub struct Guide {
    pub guide_id: GuideId,
    pub user_id: UserId,
    pub bio: String,
    pub certifications: Vec<String>,
    pub experience_years: i32,
    pub specialties: Vec<String>,
    pub languages: Vec<String>,
    pub verified: bool,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
