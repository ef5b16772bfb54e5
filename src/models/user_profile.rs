use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub wallet_address: String,
    pub username: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    pub kyc_status: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct UpsertUserProfile {
    pub wallet_address: String,
    pub username: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    pub kyc_status: String,
}
