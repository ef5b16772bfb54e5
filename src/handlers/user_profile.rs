use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::common::{ApiJson, ApiPath};
use crate::models::{UpsertUserProfile, UserProfile};
use crate::repositories::UserProfileRepository;
use crate::state::AppState;
use crate::validators;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertProfileRequest {
    pub username: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    /// Defaults to "unverified" when omitted or empty
    pub kyc_status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub wallet_address: String,
    pub username: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    pub kyc_status: String,
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl From<UserProfile> for ProfileResponse {
    fn from(p: UserProfile) -> Self {
        Self {
            wallet_address: p.wallet_address,
            username: p.username,
            email: p.email,
            profile_image_url: p.profile_image_url,
            kyc_status: p.kyc_status,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

// ============ Handlers ============

/// Get a user profile by wallet address
#[utoipa::path(
    get,
    path = "/api/v1/profiles/{wallet_address}",
    params(("wallet_address" = String, Path, description = "Wallet address (42 chars, 0x-prefixed)")),
    responses(
        (status = 200, description = "User profile", body = ProfileResponse),
        (status = 400, description = "Invalid wallet address"),
        (status = 404, description = "Profile not found")
    ),
    tag = "User Profiles"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    ApiPath(wallet_address): ApiPath<String>,
) -> AppResult<Json<ProfileResponse>> {
    validators::require_wallet_address("wallet_address", &wallet_address)?;

    let profile = UserProfileRepository::find_by_wallet(&state.db, &wallet_address).await?;
    Ok(Json(profile.into()))
}

/// Create or update a user profile, keyed by wallet address. The address
/// itself is immutable; username/email collisions with a different profile
/// are rejected as conflicts.
#[utoipa::path(
    put,
    path = "/api/v1/profiles/{wallet_address}",
    params(("wallet_address" = String, Path, description = "Wallet address (42 chars, 0x-prefixed)")),
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, description = "Profile created or updated", body = ProfileResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already exists")
    ),
    tag = "User Profiles"
)]
pub async fn upsert_profile(
    State(state): State<AppState>,
    ApiPath(wallet_address): ApiPath<String>,
    ApiJson(payload): ApiJson<UpsertProfileRequest>,
) -> AppResult<Json<ProfileResponse>> {
    validators::require_wallet_address("wallet_address", &wallet_address)?;
    validators::require_non_empty("username", &payload.username)?;
    validators::require_non_empty("email", &payload.email)?;

    let kyc_status = match validators::provided(&payload.kyc_status) {
        Some(status) => status.to_string(),
        None => "unverified".to_string(),
    };

    let input = UpsertUserProfile {
        wallet_address,
        username: payload.username,
        email: payload.email,
        profile_image_url: payload.profile_image_url,
        kyc_status,
    };

    let profile = UserProfileRepository::upsert(&state.db, &input).await?;
    Ok(Json(profile.into()))
}
