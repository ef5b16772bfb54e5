use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::handlers::common::{ApiJson, ApiPath, MessageResponse};
use crate::models::{CreateExternalLink, ExternalLink, UpdateExternalLink};
use crate::repositories::{ExternalLinkRepository, ProjectRepository, Repository};
use crate::state::AppState;
use crate::validators;

// ============ Request/Response DTOs ============

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ExternalLinkInput {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateExternalLinkRequest {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExternalLinkResponse {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub url: String,
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl From<ExternalLink> for ExternalLinkResponse {
    fn from(l: ExternalLink) -> Self {
        Self {
            id: l.id,
            project_id: l.project_id,
            name: l.name,
            url: l.url,
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}

// ============ Handlers ============

/// List a project's external links, oldest first
#[utoipa::path(
    get,
    path = "/api/v1/projects/{id}/links",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "External links for the project", body = [ExternalLinkResponse]),
        (status = 404, description = "Project not found")
    ),
    tag = "External Links"
)]
pub async fn list_links(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Vec<ExternalLinkResponse>>> {
    ProjectRepository::find_by_id(&state.db, id).await?;

    let links = ExternalLinkRepository::list_by_project(&state.db, id).await?;
    Ok(Json(links.into_iter().map(|l| l.into()).collect()))
}

/// Add an external link to a project
#[utoipa::path(
    post,
    path = "/api/v1/projects/{id}/links",
    params(("id" = Uuid, Path, description = "Project ID")),
    request_body = ExternalLinkInput,
    responses(
        (status = 201, description = "External link created", body = ExternalLinkResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Project not found")
    ),
    tag = "External Links"
)]
pub async fn create_link(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<ExternalLinkInput>,
) -> AppResult<(StatusCode, Json<ExternalLinkResponse>)> {
    ProjectRepository::find_by_id(&state.db, id).await?;

    validators::require_non_empty("name", &payload.name)?;
    validators::require_non_empty("url", &payload.url)?;

    let input = CreateExternalLink {
        name: payload.name,
        url: payload.url,
    };

    let link = ExternalLinkRepository::create(&state.db, id, &input).await?;
    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Update an external link. Empty fields in the payload are ignored rather
/// than clearing the stored value.
#[utoipa::path(
    put,
    path = "/api/v1/projects/{id}/links/{link_id}",
    params(
        ("id" = Uuid, Path, description = "Project ID"),
        ("link_id" = Uuid, Path, description = "Link ID")
    ),
    request_body = UpdateExternalLinkRequest,
    responses(
        (status = 200, description = "External link updated", body = ExternalLinkResponse),
        (status = 404, description = "External link not found")
    ),
    tag = "External Links"
)]
pub async fn update_link(
    State(state): State<AppState>,
    ApiPath((id, link_id)): ApiPath<(Uuid, Uuid)>,
    ApiJson(payload): ApiJson<UpdateExternalLinkRequest>,
) -> AppResult<Json<ExternalLinkResponse>> {
    let existing = ExternalLinkRepository::find_by_id(&state.db, link_id).await?;
    if existing.project_id != id {
        return Err(AppError::NotFound("External link"));
    }

    let input = UpdateExternalLink {
        name: payload.name,
        url: payload.url,
    };

    let link = ExternalLinkRepository::update(&state.db, link_id, &input).await?;
    Ok(Json(link.into()))
}

/// Delete an external link from a project
#[utoipa::path(
    delete,
    path = "/api/v1/projects/{id}/links/{link_id}",
    params(
        ("id" = Uuid, Path, description = "Project ID"),
        ("link_id" = Uuid, Path, description = "Link ID")
    ),
    responses(
        (status = 200, description = "External link deleted", body = MessageResponse),
        (status = 404, description = "External link not found")
    ),
    tag = "External Links"
)]
pub async fn delete_link(
    State(state): State<AppState>,
    ApiPath((id, link_id)): ApiPath<(Uuid, Uuid)>,
) -> AppResult<Json<MessageResponse>> {
    let existing = ExternalLinkRepository::find_by_id(&state.db, link_id).await?;
    if existing.project_id != id {
        return Err(AppError::NotFound("External link"));
    }

    ExternalLinkRepository::delete(&state.db, link_id).await?;
    Ok(Json(MessageResponse::new("External link deleted successfully")))
}
