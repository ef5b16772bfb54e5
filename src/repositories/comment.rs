use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entity::comment::{self, ActiveModel, Column, Entity as CommentEntity};
use crate::error::{AppError, AppResult};
use crate::idgen;
use crate::models::{Comment, CreateComment, UpdateComment};
use crate::repositories::Repository;

/// Comment repository for database operations.
///
/// Cross-entity checks (project existence, parent existence, parent in the
/// same project) belong to the handler; the only relational enforcement here
/// is the store's foreign keys.
pub struct CommentRepository;

#[async_trait]
impl Repository<Comment> for CommentRepository {
    async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> AppResult<Comment> {
        let model = CommentEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(AppError::NotFound("Comment"))?;

        Ok(model.into())
    }

    async fn delete(db: &DatabaseConnection, id: Uuid) -> AppResult<()> {
        let result = CommentEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Comment"));
        }

        Ok(())
    }
}

impl CommentRepository {
    /// Create a new comment
    pub async fn create(db: &DatabaseConnection, input: &CreateComment) -> AppResult<Comment> {
        let now = time::OffsetDateTime::now_utc();
        let model = ActiveModel {
            id: Set(idgen::generate()),
            project_id: Set(input.project_id),
            author_wallet_address: Set(input.author_wallet_address.clone()),
            parent_comment_id: Set(input.parent_comment_id),
            content: Set(input.content.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(db).await?;
        Ok(result.into())
    }

    /// List a project's comments, newest first
    pub async fn list_by_project(
        db: &DatabaseConnection,
        project_id: Uuid,
    ) -> AppResult<Vec<Comment>> {
        let models = CommentEntity::find()
            .filter(Column::ProjectId.eq(project_id))
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    /// List replies to a comment, oldest first
    pub async fn replies(db: &DatabaseConnection, parent_id: Uuid) -> AppResult<Vec<Comment>> {
        let models = CommentEntity::find()
            .filter(Column::ParentCommentId.eq(parent_id))
            .order_by_asc(Column::CreatedAt)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    /// Update a comment's content
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: &UpdateComment,
    ) -> AppResult<Comment> {
        let model = CommentEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(AppError::NotFound("Comment"))?;

        let mut active: ActiveModel = model.into();
        active.content = Set(input.content.clone());
        active.updated_at = Set(time::OffsetDateTime::now_utc());

        let result = active.update(db).await?;
        Ok(result.into())
    }
}

// Conversion from SeaORM model to our domain model
impl From<comment::Model> for Comment {
    fn from(m: comment::Model) -> Self {
        Self {
            id: m.id,
            project_id: m.project_id,
            author_wallet_address: m.author_wallet_address,
            parent_comment_id: m.parent_comment_id,
            content: m.content,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
