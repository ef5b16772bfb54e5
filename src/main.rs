use anyhow::Context;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crowdfund_api::config::Config;
use crowdfund_api::handlers::{
    AddInvestorRequest, CommentResponse, CreateCommentRequest, CreateProjectRequest,
    ExternalLinkInput, ExternalLinkResponse, HealthResponse, InvestorListResponse,
    MessageResponse, ProfileResponse, ProjectResponse, UpdateExternalLinkRequest,
    UpdateProjectRequest, UpsertProfileRequest,
};
use crowdfund_api::state::AppState;
use crowdfund_api::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::project::create_project,
        handlers::project::list_projects,
        handlers::project::get_project,
        handlers::project::update_project,
        handlers::project::delete_project,
        handlers::project::list_investors,
        handlers::project::add_investor,
        handlers::project::remove_investor,
        handlers::comment::list_comments,
        handlers::comment::create_comment,
        handlers::comment::list_replies,
        handlers::external_link::list_links,
        handlers::external_link::create_link,
        handlers::external_link::update_link,
        handlers::external_link::delete_link,
        handlers::user_profile::get_profile,
        handlers::user_profile::upsert_profile,
    ),
    components(schemas(
        HealthResponse,
        MessageResponse,
        CreateProjectRequest,
        UpdateProjectRequest,
        ProjectResponse,
        AddInvestorRequest,
        InvestorListResponse,
        CreateCommentRequest,
        CommentResponse,
        ExternalLinkInput,
        UpdateExternalLinkRequest,
        ExternalLinkResponse,
        UpsertProfileRequest,
        ProfileResponse,
    )),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Projects", description = "Crowdfunding project management"),
        (name = "Investors", description = "Project investor list management"),
        (name = "Comments", description = "Threaded project comments"),
        (name = "External Links", description = "Project external links"),
        (name = "User Profiles", description = "Wallet-keyed user profiles")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env().context("failed to load configuration")?;
    let addr = config.server_addr();

    // Initialize application state (connects to the database, runs migrations)
    tracing::info!("Connecting to database...");
    let state = AppState::new(config)
        .await
        .context("failed to initialize application state")?;
    tracing::info!("Database connection established");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
