pub use super::comment::Entity as CommentEntity;
pub use super::external_link::Entity as ExternalLinkEntity;
pub use super::project::Entity as ProjectEntity;
pub use super::user_profile::Entity as UserProfileEntity;
