use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entity::external_link::{self, ActiveModel, Column, Entity as ExternalLinkEntity};
use crate::error::{AppError, AppResult};
use crate::idgen;
use crate::models::{CreateExternalLink, ExternalLink, UpdateExternalLink};
use crate::repositories::Repository;
use crate::validators;

/// External link repository for database operations
pub struct ExternalLinkRepository;

#[async_trait]
impl Repository<ExternalLink> for ExternalLinkRepository {
    async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> AppResult<ExternalLink> {
        let model = ExternalLinkEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(AppError::NotFound("External link"))?;

        Ok(model.into())
    }

    async fn delete(db: &DatabaseConnection, id: Uuid) -> AppResult<()> {
        let result = ExternalLinkEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("External link"));
        }

        Ok(())
    }
}

impl ExternalLinkRepository {
    /// Create a link for a project. Generic over the connection so the
    /// project repository can call it inside its transactions.
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        project_id: Uuid,
        input: &CreateExternalLink,
    ) -> AppResult<ExternalLink> {
        let now = time::OffsetDateTime::now_utc();
        let model = ActiveModel {
            id: Set(idgen::generate()),
            project_id: Set(project_id),
            name: Set(input.name.clone()),
            url: Set(input.url.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(db).await?;
        Ok(result.into())
    }

    /// List links for a project in insertion order
    pub async fn list_by_project(
        db: &DatabaseConnection,
        project_id: Uuid,
    ) -> AppResult<Vec<ExternalLink>> {
        let models = ExternalLinkEntity::find()
            .filter(Column::ProjectId.eq(project_id))
            .order_by_asc(Column::CreatedAt)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    /// Field-level update: a field is only overwritten when the incoming
    /// value is non-empty after trimming; empty fields keep their value.
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: &UpdateExternalLink,
    ) -> AppResult<ExternalLink> {
        let model = ExternalLinkEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(AppError::NotFound("External link"))?;

        let mut active: ActiveModel = model.into();

        if let Some(name) = validators::provided(&input.name) {
            active.name = Set(name.to_string());
        }
        if let Some(url) = validators::provided(&input.url) {
            active.url = Set(url.to_string());
        }
        active.updated_at = Set(time::OffsetDateTime::now_utc());

        let result = active.update(db).await?;
        Ok(result.into())
    }

    /// Delete every link belonging to a project (bulk-replace path)
    pub async fn delete_by_project<C: ConnectionTrait>(db: &C, project_id: Uuid) -> AppResult<()> {
        ExternalLinkEntity::delete_many()
            .filter(Column::ProjectId.eq(project_id))
            .exec(db)
            .await?;

        Ok(())
    }
}

// Conversion from SeaORM model to our domain model
impl From<external_link::Model> for ExternalLink {
    fn from(m: external_link::Model) -> Self {
        Self {
            id: m.id,
            project_id: m.project_id,
            name: m.name,
            url: m.url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
