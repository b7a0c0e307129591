use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    experience::{
        event::{CreateExperience, UpdateExperience},
        Activity, Currency, Difficulty, Experience, ExperienceListOptions, ExperienceStatus,
    },
    id::{ExperienceId, GuideId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub description: String,
    #[garde(skip)]
    pub activity: Activity,
    #[garde(length(min = 1))]
    pub location: String,
    #[garde(skip)]
    pub difficulty: Difficulty,
    #[garde(skip)]
    pub date: DateTime<Utc>,
    #[garde(range(min = 1))]
    pub min_group_size: i32,
    #[garde(range(min = 1))]
    pub max_group_size: i32,
    #[garde(range(min = 1))]
    pub price_per_person: i64,
    #[garde(skip)]
    pub currency: Currency,
    #[garde(skip)]
    #[serde(default)]
    pub photos: Vec<String>,
}

impl CreateExperienceRequest {
    pub fn into_event(self, guide_id: GuideId) -> CreateExperience {
        let CreateExperienceRequest {
            title,
            description,
            activity,
            location,
            difficulty,
            date,
            min_group_size,
            max_group_size,
            price_per_person,
            currency,
            photos,
        } = self;
        CreateExperience::new(
            guide_id,
            title,
            description,
            activity,
            location,
            difficulty,
            date,
            min_group_size,
            max_group_size,
            price_per_person,
            currency,
            photos,
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceResponse {
    pub experience_id: ExperienceId,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperienceRequest {
    #[garde(inner(length(min = 1)))]
    pub title: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub description: Option<String>,
    #[garde(skip)]
    pub activity: Option<Activity>,
    #[garde(inner(length(min = 1)))]
    pub location: Option<String>,
    #[garde(skip)]
    pub difficulty: Option<Difficulty>,
    #[garde(skip)]
    pub date: Option<DateTime<Utc>>,
    #[garde(inner(range(min = 1)))]
    pub min_group_size: Option<i32>,
    #[garde(inner(range(min = 1)))]
    pub max_group_size: Option<i32>,
    #[garde(inner(range(min = 1)))]
    pub price_per_person: Option<i64>,
    #[garde(skip)]
    pub currency: Option<Currency>,
    #[garde(skip)]
    pub photos: Option<Vec<String>>,
}

impl UpdateExperienceRequest {
    pub fn into_event(self, experience_id: ExperienceId, requested_user: UserId) -> UpdateExperience {
        let UpdateExperienceRequest {
            title,
            description,
            activity,
            location,
            difficulty,
            date,
            min_group_size,
            max_group_size,
            price_per_person,
            currency,
            photos,
        } = self;
        UpdateExperience {
            experience_id,
            requested_user,
            title,
            description,
            activity,
            location,
            difficulty,
            date,
            min_group_size,
            max_group_size,
            price_per_person,
            currency,
            photos,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceListQuery {
    pub search: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub people: Option<i32>,
    pub activity: Option<Activity>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

impl From<ExperienceListQuery> for ExperienceListOptions {
    fn from(value: ExperienceListQuery) -> Self {
        let ExperienceListQuery {
            search,
            start_date,
            end_date,
            people,
            activity,
            min_price,
            max_price,
        } = value;
        Self {
            search,
            start_date,
            end_date,
            people,
            activity,
            min_price,
            max_price,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceResponse {
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
}

impl From<Experience> for ExperienceResponse {
    fn from(value: Experience) -> Self {
        let Experience {
            experience_id,
            guide_id,
            title,
            description,
            activity,
            location,
            difficulty,
            date,
            min_group_size,
            max_group_size,
            price_per_person,
            currency,
            photos,
            status,
            booked,
            rating,
            created_at: _,
            updated_at: _,
        } = value;
        Self {
            experience_id,
            guide_id,
            title,
            description,
            activity,
            location,
            difficulty,
            date,
            min_group_size,
            max_group_size,
            price_per_person,
            currency,
            photos,
            status,
            booked,
            rating,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencesResponse {
    pub items: Vec<ExperienceResponse>,
}

impl From<Vec<Experience>> for ExperiencesResponse {
    fn from(value: Vec<Experience>) -> Self {
        Self {
            items: value.into_iter().map(ExperienceResponse::from).collect(),
        }
    }
}
