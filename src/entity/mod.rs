pub mod comment;
pub mod external_link;
pub mod project;
pub mod user_profile;

pub mod prelude;

pub use prelude::*;
