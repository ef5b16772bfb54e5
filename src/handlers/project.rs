use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppResult;
use crate::handlers::common::{ApiJson, ApiPath, MessageResponse};
use crate::handlers::external_link::ExternalLinkInput;
use crate::models::{CreateExternalLink, CreateProject, Project, UpdateProject};
use crate::repositories::{ProjectRepository, Repository};
use crate::state::AppState;
use crate::validators;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    pub creator_wallet_address: String,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub developer_name: Option<String>,
    pub genre: Option<String>,
    pub game_type: Option<String>,
    /// Optional external links, stored in the same transaction as the project
    pub links: Option<Vec<ExternalLinkInput>>,
}

/// Partial update. Unknown fields in the payload (including `id` and
/// `created_at`) are dropped during deserialization and can never be applied.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    pub creator_wallet_address: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub developer_name: Option<String>,
    pub genre: Option<String>,
    pub game_type: Option<String>,
    /// When present, replaces the project's external links wholesale
    pub links: Option<Vec<ExternalLinkInput>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub creator_wallet_address: String,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub developer_name: Option<String>,
    pub genre: Option<String>,
    pub game_type: Option<String>,
    pub investor_wallet_addresses: Vec<String>,
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            creator_wallet_address: p.creator_wallet_address,
            title: p.title,
            description: p.description,
            cover_image_url: p.cover_image_url,
            developer_name: p.developer_name,
            genre: p.genre,
            game_type: p.game_type,
            investor_wallet_addresses: p.investor_wallet_addresses,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddInvestorRequest {
    pub wallet_address: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvestorListResponse {
    pub investors: Vec<String>,
}

fn collect_links(links: &[ExternalLinkInput]) -> AppResult<Vec<CreateExternalLink>> {
    links
        .iter()
        .map(|link| {
            validators::require_non_empty("name", &link.name)?;
            validators::require_non_empty("url", &link.url)?;
            Ok(CreateExternalLink {
                name: link.name.clone(),
                url: link.url.clone(),
            })
        })
        .collect()
}

// ============ Handlers ============

/// Create a new crowdfunding project
#[utoipa::path(
    post,
    path = "/api/v1/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "Projects"
)]
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    validators::require_wallet_address("creator_wallet_address", &payload.creator_wallet_address)?;
    validators::require_non_empty("title", &payload.title)?;

    let links = collect_links(payload.links.as_deref().unwrap_or_default())?;

    let input = CreateProject {
        creator_wallet_address: payload.creator_wallet_address,
        title: payload.title,
        description: payload.description,
        cover_image_url: payload.cover_image_url,
        developer_name: payload.developer_name,
        genre: payload.genre,
        game_type: payload.game_type,
        links,
    };

    let project = ProjectRepository::create(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

/// List all projects
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    responses(
        (status = 200, description = "All projects", body = [ProjectResponse])
    ),
    tag = "Projects"
)]
pub async fn list_projects(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProjectResponse>>> {
    let projects = ProjectRepository::list(&state.db).await?;
    Ok(Json(projects.into_iter().map(|p| p.into()).collect()))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/api/v1/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project details", body = ProjectResponse),
        (status = 404, description = "Project not found")
    ),
    tag = "Projects"
)]
pub async fn get_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ProjectResponse>> {
    let project = ProjectRepository::find_by_id(&state.db, id).await?;
    Ok(Json(project.into()))
}

/// Partially update a project. Only submitted fields change; the identifier
/// and creation timestamp are immutable.
#[utoipa::path(
    patch,
    path = "/api/v1/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = ProjectResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Project not found")
    ),
    tag = "Projects"
)]
pub async fn update_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateProjectRequest>,
) -> AppResult<Json<ProjectResponse>> {
    if let Some(address) = &payload.creator_wallet_address {
        validators::require_wallet_address("creator_wallet_address", address)?;
    }

    let links = payload
        .links
        .as_deref()
        .map(collect_links)
        .transpose()?;

    let input = UpdateProject {
        creator_wallet_address: payload.creator_wallet_address,
        title: payload.title,
        description: payload.description,
        cover_image_url: payload.cover_image_url,
        developer_name: payload.developer_name,
        genre: payload.genre,
        game_type: payload.game_type,
        links,
    };

    let project = ProjectRepository::update(&state.db, id, &input).await?;
    Ok(Json(project.into()))
}

/// Delete a project, cascading to its comments and external links
#[utoipa::path(
    delete,
    path = "/api/v1/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project deleted", body = MessageResponse),
        (status = 404, description = "Project not found")
    ),
    tag = "Projects"
)]
pub async fn delete_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    ProjectRepository::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}

/// List a project's investor wallet addresses
#[utoipa::path(
    get,
    path = "/api/v1/projects/{id}/investors",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Investor wallet addresses", body = InvestorListResponse),
        (status = 404, description = "Project not found")
    ),
    tag = "Investors"
)]
pub async fn list_investors(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<InvestorListResponse>> {
    let investors = ProjectRepository::investors(&state.db, id).await?;
    Ok(Json(InvestorListResponse { investors }))
}

/// Add an investor's wallet address to a project
#[utoipa::path(
    post,
    path = "/api/v1/projects/{id}/investors",
    params(("id" = Uuid, Path, description = "Project ID")),
    request_body = AddInvestorRequest,
    responses(
        (status = 200, description = "Investor added", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Project not found"),
        (status = 409, description = "Investor already present")
    ),
    tag = "Investors"
)]
pub async fn add_investor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<AddInvestorRequest>,
) -> AppResult<Json<MessageResponse>> {
    validators::require_wallet_address("wallet_address", &payload.wallet_address)?;

    ProjectRepository::add_investor(&state.db, id, &payload.wallet_address).await?;
    Ok(Json(MessageResponse::new("Investor added successfully")))
}

/// Remove an investor's wallet address from a project. Removing an address
/// that is not present succeeds without effect.
#[utoipa::path(
    delete,
    path = "/api/v1/projects/{id}/investors/{wallet_address}",
    params(
        ("id" = Uuid, Path, description = "Project ID"),
        ("wallet_address" = String, Path, description = "Investor wallet address")
    ),
    responses(
        (status = 200, description = "Investor removed", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Project not found")
    ),
    tag = "Investors"
)]
pub async fn remove_investor(
    State(state): State<AppState>,
    ApiPath((id, wallet_address)): ApiPath<(Uuid, String)>,
) -> AppResult<Json<MessageResponse>> {
    validators::require_non_empty("wallet_address", &wallet_address)?;

    ProjectRepository::remove_investor(&state.db, id, &wallet_address).await?;
    Ok(Json(MessageResponse::new("Investor removed successfully")))
}
