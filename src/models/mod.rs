pub mod comment;
pub mod external_link;
pub mod project;
pub mod user_profile;

pub use comment::*;
pub use external_link::*;
pub use project::*;
pub use user_profile::*;
