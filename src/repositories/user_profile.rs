use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set, SqlErr};

use crate::entity::user_profile::{self, ActiveModel, Column, Entity as UserProfileEntity};
use crate::error::{AppError, AppResult};
use crate::models::{UpsertUserProfile, UserProfile};

/// User profile repository for database operations
pub struct UserProfileRepository;

impl UserProfileRepository {
    /// Find a profile by wallet address
    pub async fn find_by_wallet(
        db: &DatabaseConnection,
        wallet_address: &str,
    ) -> AppResult<UserProfile> {
        let model = UserProfileEntity::find_by_id(wallet_address.to_string())
            .one(db)
            .await?
            .ok_or(AppError::NotFound("Profile"))?;

        Ok(model.into())
    }

    /// Insert-or-update keyed on wallet address, atomic with respect to
    /// concurrent callers on the same key. The wallet address and creation
    /// timestamp are never touched on the update path. A username or email
    /// collision with a different profile surfaces as a conflict.
    pub async fn upsert(db: &DatabaseConnection, input: &UpsertUserProfile) -> AppResult<UserProfile> {
        let now = time::OffsetDateTime::now_utc();
        let model = ActiveModel {
            wallet_address: Set(input.wallet_address.clone()),
            username: Set(input.username.clone()),
            email: Set(input.email.clone()),
            profile_image_url: Set(input.profile_image_url.clone()),
            kyc_status: Set(input.kyc_status.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = UserProfileEntity::insert(model)
            .on_conflict(
                OnConflict::column(Column::WalletAddress)
                    .update_columns([
                        Column::Username,
                        Column::Email,
                        Column::ProfileImageUrl,
                        Column::KycStatus,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict("Username or email already exists".to_string())
                }
                _ => AppError::Database(e.to_string()),
            })?;

        Ok(result.into())
    }
}

// Conversion from SeaORM model to our domain model
impl From<user_profile::Model> for UserProfile {
    fn from(m: user_profile::Model) -> Self {
        Self {
            wallet_address: m.wallet_address,
            username: m.username,
            email: m.email,
            profile_image_url: m.profile_image_url,
            kyc_status: m.kyc_status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
