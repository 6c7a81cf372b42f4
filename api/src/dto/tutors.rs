use serde::{Deserialize, Serialize};
use validator::Validate;

use tc_core::domain::entities::TutorProfileUpdate;

/// Partial profile update; omitted fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTutorProfileRequest {
    pub subjects: Option<Vec<String>>,
    #[validate(length(max = 500, message = "qualifications must be at most 500 characters"))]
    pub qualifications: Option<String>,
    #[validate(range(min = 1, message = "monthlyRate must be positive"))]
    pub monthly_rate: Option<u32>,
    #[validate(length(max = 2000, message = "bio must be at most 2000 characters"))]
    pub bio: Option<String>,
    pub classes: Option<Vec<String>>,
    pub available_time_slots: Option<Vec<String>>,
    pub location: Option<String>,
    pub profile_picture: Option<String>,
}

impl From<UpdateTutorProfileRequest> for TutorProfileUpdate {
    fn from(req: UpdateTutorProfileRequest) -> Self {
        Self {
            subjects: req.subjects,
            qualifications: req.qualifications,
            monthly_rate: req.monthly_rate,
            bio: req.bio,
            classes: req.classes,
            available_time_slots: req.available_time_slots,
            location: req.location,
            profile_picture: req.profile_picture,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub rating: i64,
    #[serde(default)]
    #[validate(length(max = 1000, message = "comment must be at most 1000 characters"))]
    pub comment: String,
}
