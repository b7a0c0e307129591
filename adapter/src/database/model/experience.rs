use chrono::{DateTime, Utc};
use kernel::model::{
    experience::{Activity, Currency, Difficulty, Experience, ExperienceStatus},
    id::{ExperienceId, GuideId},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct ExperienceRow {
    pub experience_id: ExperienceId,
    pub guide_id: GuideId,
    pub title: String,
    pub description: String,
    pub activity: String,
    pub location: String,
    pub difficulty: String,
    pub date: DateTime<Utc>,
    pub min_group_size: i32,
    pub max_group_size: i32,
    pub price_per_person: i64,
    pub currency: String,
    pub photos: Vec<String>,
    pub status: String,
    pub booked: bool,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Enum columns are stored as text; a row with an unknown value is a data
// bug, surfaced as a conversion error rather than a panic.
impl TryFrom<ExperienceRow> for Experience {
    type Error = AppError;

    fn try_from(value: ExperienceRow) -> Result<Self, Self::Error> {
        let ExperienceRow {
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
            created_at,
            updated_at,
        } = value;
        Ok(Experience {
            experience_id,
            guide_id,
            title,
            description,
            activity: parse_enum::<Activity>(&activity)?,
            location,
            difficulty: parse_enum::<Difficulty>(&difficulty)?,
            date,
            min_group_size,
            max_group_size,
            price_per_person,
            currency: parse_enum::<Currency>(&currency)?,
            photos,
            status: parse_enum::<ExperienceStatus>(&status)?,
            booked,
            rating,
            created_at,
            updated_at,
        })
    }
}

pub(crate) fn parse_enum<T: std::str::FromStr>(value: &str) -> Result<T, AppError> {
    value
        .parse::<T>()
        .map_err(|_| AppError::ConversionEntityError(format!("unknown enum value: {value}")))
}
