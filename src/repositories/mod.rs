pub mod comment;
pub mod external_link;
pub mod project;
pub mod user_profile;

pub use comment::CommentRepository;
pub use external_link::ExternalLinkRepository;
pub use project::ProjectRepository;
pub use user_profile::UserProfileRepository;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::error::AppResult;

/// Base repository trait for entities keyed by a generated identifier
#[async_trait]
pub trait Repository<T>
where
    T: Send + Sync,
{
    /// Find entity by ID
    async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> AppResult<T>;

    /// Delete entity by ID
    async fn delete(db: &DatabaseConnection, id: Uuid) -> AppResult<()>;
}
