use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::handlers::common::{ApiJson, ApiPath};
use crate::models::{Comment, CreateComment};
use crate::repositories::{CommentRepository, ProjectRepository, Repository};
use crate::state::AppState;
use crate::validators;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub author_wallet_address: String,
    pub content: String,
    /// Reply target; must be a comment on the same project
    pub parent_comment_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: Uuid,
    pub project_id: Uuid,
    pub author_wallet_address: String,
    pub parent_comment_id: Option<Uuid>,
    pub content: String,
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            project_id: c.project_id,
            author_wallet_address: c.author_wallet_address,
            parent_comment_id: c.parent_comment_id,
            content: c.content,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

// ============ Handlers ============

/// List a project's comments, newest first
#[utoipa::path(
    get,
    path = "/api/v1/projects/{id}/comments",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Comments for the project", body = [CommentResponse]),
        (status = 404, description = "Project not found")
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Vec<CommentResponse>>> {
    ProjectRepository::find_by_id(&state.db, id).await?;

    let comments = CommentRepository::list_by_project(&state.db, id).await?;
    Ok(Json(comments.into_iter().map(|c| c.into()).collect()))
}

/// Create a comment on a project. A reply must target a comment that exists
/// and belongs to the same project.
#[utoipa::path(
    post,
    path = "/api/v1/projects/{id}/comments",
    params(("id" = Uuid, Path, description = "Project ID")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Validation error or invalid parent comment"),
        (status = 404, description = "Project not found")
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<CommentResponse>)> {
    ProjectRepository::find_by_id(&state.db, id).await?;

    validators::require_non_empty("author_wallet_address", &payload.author_wallet_address)?;
    validators::require_non_empty("content", &payload.content)?;

    if let Some(parent_id) = payload.parent_comment_id {
        let parent = CommentRepository::find_by_id(&state.db, parent_id)
            .await
            .map_err(|err| match err {
                AppError::NotFound(_) => {
                    AppError::Validation("Parent comment not found".to_string())
                }
                other => other,
            })?;

        if parent.project_id != id {
            return Err(AppError::Validation(
                "Parent comment does not belong to this project".to_string(),
            ));
        }
    }

    let input = CreateComment {
        project_id: id,
        author_wallet_address: payload.author_wallet_address,
        parent_comment_id: payload.parent_comment_id,
        content: payload.content,
    };

    let comment = CommentRepository::create(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(comment.into())))
}

/// List replies to a comment, oldest first
#[utoipa::path(
    get,
    path = "/api/v1/comments/{id}/replies",
    params(("id" = Uuid, Path, description = "Parent comment ID")),
    responses(
        (status = 200, description = "Replies to the comment", body = [CommentResponse]),
        (status = 404, description = "Comment not found")
    ),
    tag = "Comments"
)]
pub async fn list_replies(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Vec<CommentResponse>>> {
    CommentRepository::find_by_id(&state.db, id).await?;

    let replies = CommentRepository::replies(&state.db, id).await?;
    Ok(Json(replies.into_iter().map(|c| c.into()).collect()))
}
