use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entity::project::{self, ActiveModel, Column, Entity as ProjectEntity};
use crate::error::{AppError, AppResult};
use crate::idgen;
use crate::models::{CreateProject, Project, UpdateProject};
use crate::repositories::{ExternalLinkRepository, Repository};

/// Project repository for database operations
pub struct ProjectRepository;

#[async_trait]
impl Repository<Project> for ProjectRepository {
    async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> AppResult<Project> {
        let model = ProjectEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(AppError::NotFound("Project"))?;

        Ok(model.into())
    }

    /// Delete a project. Comments and external links go with it via the
    /// cascade constraints on their foreign keys.
    async fn delete(db: &DatabaseConnection, id: Uuid) -> AppResult<()> {
        let result = ProjectEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Project"));
        }

        Ok(())
    }
}

impl ProjectRepository {
    /// Create a new project, persisting any submitted external links in the
    /// same transaction: if a link insert fails, the project rolls back too.
    pub async fn create(db: &DatabaseConnection, input: &CreateProject) -> AppResult<Project> {
        let now = time::OffsetDateTime::now_utc();
        let txn = db.begin().await?;

        let model = ActiveModel {
            id: Set(idgen::generate()),
            creator_wallet_address: Set(input.creator_wallet_address.clone()),
            title: Set(input.title.clone()),
            description: Set(input.description.clone()),
            cover_image_url: Set(input.cover_image_url.clone()),
            developer_name: Set(input.developer_name.clone()),
            genre: Set(input.genre.clone()),
            game_type: Set(input.game_type.clone()),
            investor_wallet_addresses: Set(Vec::new()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&txn).await?;

        for link in &input.links {
            ExternalLinkRepository::create(&txn, result.id, link).await?;
        }

        txn.commit().await?;
        Ok(result.into())
    }

    /// List all projects, newest first
    pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<Project>> {
        let models = ProjectEntity::find()
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    /// Partial update: only the provided fields change. The patch struct has
    /// no identifier or creation-timestamp fields, so those can never move.
    /// When `links` is present the project's links are replaced wholesale,
    /// atomically with the field update.
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: &UpdateProject,
    ) -> AppResult<Project> {
        let txn = db.begin().await?;

        let model = ProjectEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound("Project"))?;

        let mut active: ActiveModel = model.into();

        if let Some(address) = &input.creator_wallet_address {
            active.creator_wallet_address = Set(address.clone());
        }
        if let Some(title) = &input.title {
            active.title = Set(title.clone());
        }
        if let Some(description) = &input.description {
            active.description = Set(Some(description.clone()));
        }
        if let Some(cover_image_url) = &input.cover_image_url {
            active.cover_image_url = Set(Some(cover_image_url.clone()));
        }
        if let Some(developer_name) = &input.developer_name {
            active.developer_name = Set(Some(developer_name.clone()));
        }
        if let Some(genre) = &input.genre {
            active.genre = Set(Some(genre.clone()));
        }
        if let Some(game_type) = &input.game_type {
            active.game_type = Set(Some(game_type.clone()));
        }
        active.updated_at = Set(time::OffsetDateTime::now_utc());

        let result = active.update(&txn).await?;

        if let Some(links) = &input.links {
            ExternalLinkRepository::delete_by_project(&txn, id).await?;
            for link in links {
                ExternalLinkRepository::create(&txn, id, link).await?;
            }
        }

        txn.commit().await?;
        Ok(result.into())
    }

    /// Add an investor wallet address to a project.
    ///
    /// The append runs as a store-level `array_append` in a single UPDATE,
    /// not a read-modify-write of the whole list, so concurrent investor
    /// changes on the same project cannot lose updates.
    pub async fn add_investor(
        db: &DatabaseConnection,
        project_id: Uuid,
        wallet_address: &str,
    ) -> AppResult<()> {
        let model = ProjectEntity::find_by_id(project_id)
            .one(db)
            .await?
            .ok_or(AppError::NotFound("Project"))?;

        // Case-sensitive exact match
        if model
            .investor_wallet_addresses
            .iter()
            .any(|addr| addr == wallet_address)
        {
            return Err(AppError::Conflict(
                "Investor already exists in this project".to_string(),
            ));
        }

        ProjectEntity::update_many()
            .col_expr(
                Column::InvestorWalletAddresses,
                Expr::cust_with_values(
                    "ARRAY_APPEND(investor_wallet_addresses, $1)",
                    [wallet_address.to_string()],
                ),
            )
            .col_expr(
                Column::UpdatedAt,
                Expr::value(time::OffsetDateTime::now_utc()),
            )
            .filter(Column::Id.eq(project_id))
            .exec(db)
            .await?;

        Ok(())
    }

    /// Remove an investor wallet address from a project. Removing an address
    /// that is not present is a no-op success.
    pub async fn remove_investor(
        db: &DatabaseConnection,
        project_id: Uuid,
        wallet_address: &str,
    ) -> AppResult<()> {
        let exists = ProjectEntity::find_by_id(project_id).one(db).await?;
        if exists.is_none() {
            return Err(AppError::NotFound("Project"));
        }

        ProjectEntity::update_many()
            .col_expr(
                Column::InvestorWalletAddresses,
                Expr::cust_with_values(
                    "ARRAY_REMOVE(investor_wallet_addresses, $1)",
                    [wallet_address.to_string()],
                ),
            )
            .col_expr(
                Column::UpdatedAt,
                Expr::value(time::OffsetDateTime::now_utc()),
            )
            .filter(Column::Id.eq(project_id))
            .exec(db)
            .await?;

        Ok(())
    }

    /// List investor wallet addresses for a project (empty when none)
    pub async fn investors(db: &DatabaseConnection, project_id: Uuid) -> AppResult<Vec<String>> {
        let model = ProjectEntity::find_by_id(project_id)
            .one(db)
            .await?
            .ok_or(AppError::NotFound("Project"))?;

        Ok(model.investor_wallet_addresses)
    }
}

// Conversion from SeaORM model to our domain model
impl From<project::Model> for Project {
    fn from(m: project::Model) -> Self {
        Self {
            id: m.id,
            creator_wallet_address: m.creator_wallet_address,
            title: m.title,
            description: m.description,
            cover_image_url: m.cover_image_url,
            developer_name: m.developer_name,
            genre: m.genre,
            game_type: m.game_type,
            investor_wallet_addresses: m.investor_wallet_addresses,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
