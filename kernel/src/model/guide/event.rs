use crate::model::id::UserId;
use derive_new::new;

#[derive(new)]
pub struct CreateGuide {
    pub user_id: UserId,
    pub bio: String,
    pub certifications: Vec<String>,
    pub experience_years: i32,
    pub specialties: Vec<String>,
    pub languages: Vec<String>,
}
