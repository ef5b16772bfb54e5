use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::models::CreateExternalLink;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub creator_wallet_address: String,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub developer_name: Option<String>,
    pub genre: Option<String>,
    pub game_type: Option<String>,
    pub investor_wallet_addresses: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateProject {
    pub creator_wallet_address: String,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub developer_name: Option<String>,
    pub genre: Option<String>,
    pub game_type: Option<String>,
    /// Persisted in the same transaction as the project row.
    pub links: Vec<CreateExternalLink>,
}

/// Allow-listed patch: identifier and creation timestamp are not
/// representable here, so they can never be mutated.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProject {
    pub creator_wallet_address: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub developer_name: Option<String>,
    pub genre: Option<String>,
    pub game_type: Option<String>,
    /// When present, the project's links are replaced wholesale.
    pub links: Option<Vec<CreateExternalLink>>,
}
