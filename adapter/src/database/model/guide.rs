use chrono::{DateTime, Utc};
use kernel::model::{
    guide::Guide,
    id::{GuideId, UserId},
};

#[derive(sqlx::FromRow)]
pub struct GuideRow {
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

impl From<GuideRow> for Guide {
    fn from(value: GuideRow) -> Self {
        let GuideRow {
            guide_id,
            user_id,
            bio,
            certifications,
            experience_years,
            specialties,
            languages,
            verified,
            rating,
            created_at,
            updated_at,
        } = value;
        Guide {
            guide_id,
            user_id,
            bio,
            certifications,
            experience_years,
            specialties,
            languages,
            verified,
            rating,
            created_at,
            updated_at,
        }
    }
}
