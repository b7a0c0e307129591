use garde::Validate;
use kernel::model::{
    guide::{event::CreateGuide, Guide},
    id::{GuideId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuideRequest {
    #[garde(length(min = 1))]
    pub bio: String,
    #[garde(skip)]
    pub certifications: Vec<String>,
    #[garde(range(min = 0))]
    pub experience_years: i32,
    #[garde(skip)]
    pub specialties: Vec<String>,
    #[garde(skip)]
    pub languages: Vec<String>,
}

impl CreateGuideRequest {
    pub fn into_event(self, user_id: UserId) -> CreateGuide {
        let CreateGuideRequest {
            bio,
            certifications,
            experience_years,
            specialties,
            languages,
        } = self;
        CreateGuide::new(
            user_id,
            bio,
            certifications,
            experience_years,
            specialties,
            languages,
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuideResponse {
    pub guide_id: GuideId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideResponse {
    pub guide_id: GuideId,
    pub user_id: UserId,
    pub bio: String,
    pub certifications: Vec<String>,
    pub experience_years: i32,
    pub specialties: Vec<String>,
    pub languages: Vec<String>,
    pub verified: bool,
    pub rating: f64,
}

impl From<Guide> for GuideResponse {
    fn from(value: Guide) -> Self {
        let Guide {
            guide_id,
            user_id,
            bio,
            certifications,
            experience_years,
            specialties,
            languages,
            verified,
            rating,
            created_at: _,
            updated_at: _,
        } = value;
        Self {
            guide_id,
            user_id,
            bio,
            certifications,
            experience_years,
            specialties,
            languages,
            verified,
            rating,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidesResponse {
    pub items: Vec<GuideResponse>,
}

impl From<Vec<Guide>> for GuidesResponse {
    fn from(value: Vec<Guide>) -> Self {
        Self {
            items: value.into_iter().map(GuideResponse::from).collect(),
        }
    }
}
