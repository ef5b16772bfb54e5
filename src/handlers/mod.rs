pub mod comment;
pub mod common;
pub mod external_link;
pub mod health;
pub mod project;
pub mod user_profile;

pub use comment::{
    create_comment, list_comments, list_replies, CommentResponse, CreateCommentRequest,
};
pub use common::{ApiJson, ApiPath, MessageResponse};
pub use external_link::{
    create_link, delete_link, list_links, update_link, ExternalLinkInput, ExternalLinkResponse,
    UpdateExternalLinkRequest,
};
pub use health::{health, HealthResponse};
pub use project::{
    add_investor, create_project, delete_project, get_project, list_investors, list_projects,
    remove_investor, update_project, AddInvestorRequest, CreateProjectRequest,
    InvestorListResponse, ProjectResponse, UpdateProjectRequest,
};
pub use user_profile::{
    get_profile, upsert_profile, ProfileResponse, UpsertProfileRequest,
};
