use crate::model::id::{ExperienceId, GuideId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

pub mod event;

#[derive(Debug, Clone)]
pub struct Experience {
    pub experience_id: ExperienceId,
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
    pub status: ExperienceStatus,
    pub booked: bool,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "camelCase")]
pub enum Activity {
    Hiking,
    Alpinism,
    Trail,
    Climbing,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Mxn,
    Usd,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "camelCase")]
pub enum ExperienceStatus {
    Draft,
    Published,
    Archived,
    Progress,
    Completed,
}

impl ExperienceStatus {
    /// Lifecycle: draft -> published -> progress -> completed, with
    /// archived reachable from draft and published. The booked flag is
    /// orthogonal and owned by the reservation workflow.
    pub fn can_transition_to(self, next: ExperienceStatus) -> bool {
        use ExperienceStatus::*;
        matches!(
            (self, next),
            (Draft, Published)
                | (Draft, Archived)
                | (Published, Archived)
                | (Published, Progress)
                | (Progress, Completed)
        )
    }
}

/// Search filters for the published-experience listing.
#[derive(Debug, Default)]
pub struct ExperienceListOptions {
    pub search: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub people: Option<i32>,
    pub activity: Option<Activity>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}
