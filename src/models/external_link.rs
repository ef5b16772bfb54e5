use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalLink {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub url: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateExternalLink {
    pub name: String,
    pub url: String,
}

/// Fields left empty in the payload are ignored rather than cleared.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateExternalLink {
    pub name: Option<String>,
    pub url: Option<String>,
}
