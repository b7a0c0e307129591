use crate::model::{
    experience::{Activity, Currency, Difficulty, ExperienceStatus},
    id::{ExperienceId, GuideId, UserId},
};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(new)]
pub struct CreateExperience {
    pub guide_id: GuideId,
    pub title: String,
    pub description: String,
    pub activity: Activity,
    pub location: String,
    pub difficulty: Difficulty,
    pub date: DateTime<Utc>,
    pub min_group_size: i32,
    pub max_group_size: i32,
    pub price_per_person: i64,
    pub currency: Currency,
    pub photos: Vec<String>,
}

#[derive(Debug)]
pub struct UpdateExperience {
    pub experience_id: ExperienceId,
    pub requested_user: UserId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub activity: Option<Activity>,
    pub location: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub date: Option<DateTime<Utc>>,
    pub min_group_size: Option<i32>,
    pub max_group_size: Option<i32>,
    pub price_per_person: Option<i64>,
    pub currency: Option<Currency>,
    pub photos: Option<Vec<String>>,
}

#[derive(Debug, new)]
pub struct UpdateExperienceStatus {
    pub experience_id: ExperienceId,
    pub status: ExperienceStatus,
    pub requested_user: UserId,
}

#[derive(Debug, new)]
pub struct RepublishExperience {
    pub experience_id: ExperienceId,
    pub requested_user: UserId,
}

#[derive(Debug, new)]
pub struct DeleteExperience {
    pub experience_id: ExperienceId,
    pub requested_user: UserId,
}
