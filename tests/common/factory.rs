use uuid::Uuid;

use crowdfund_api::models::{
    Comment, CreateComment, CreateExternalLink, CreateProject, ExternalLink, Project,
    UpsertUserProfile, UserProfile,
};
use crowdfund_api::repositories::{
    CommentRepository, ExternalLinkRepository, ProjectRepository, UserProfileRepository,
};
use crowdfund_api::state::AppState;

/// Generate a unique, well-formed wallet address (42 chars, 0x prefix)
#[allow(dead_code)]
pub fn wallet_address() -> String {
    let hex = format!("{}{}", Uuid::now_v7().simple(), Uuid::now_v7().simple());
    format!("0x{}", &hex[..40])
}

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create a test project with no links
    pub async fn create_project(&self) -> Project {
        let input = CreateProject {
            creator_wallet_address: wallet_address(),
            title: format!("Test Project {}", Uuid::now_v7()),
            description: Some("A test project".to_string()),
            cover_image_url: None,
            developer_name: Some("Test Studio".to_string()),
            genre: Some("RPG".to_string()),
            game_type: Some("web".to_string()),
            links: Vec::new(),
        };

        ProjectRepository::create(&self.state.db, &input).await.unwrap()
    }

    /// Create a test comment on a project
    pub async fn create_comment(&self, project_id: Uuid, parent: Option<Uuid>) -> Comment {
        let input = CreateComment {
            project_id,
            author_wallet_address: wallet_address(),
            parent_comment_id: parent,
            content: format!("Test comment {}", Uuid::now_v7()),
        };

        CommentRepository::create(&self.state.db, &input).await.unwrap()
    }

    /// Create a test external link on a project
    pub async fn create_link(&self, project_id: Uuid) -> ExternalLink {
        let input = CreateExternalLink {
            name: "Twitter".to_string(),
            url: "https://twitter.com/test".to_string(),
        };

        ExternalLinkRepository::create(&self.state.db, project_id, &input)
            .await
            .unwrap()
    }

    /// Create a test user profile for a wallet address
    pub async fn create_profile(&self, wallet_address: &str) -> UserProfile {
        let unique = Uuid::now_v7().simple().to_string();
        let input = UpsertUserProfile {
            wallet_address: wallet_address.to_string(),
            username: format!("user-{}", unique),
            email: format!("user-{}@example.com", unique),
            profile_image_url: None,
            kyc_status: "unverified".to_string(),
        };

        UserProfileRepository::upsert(&self.state.db, &input).await.unwrap()
    }
}
