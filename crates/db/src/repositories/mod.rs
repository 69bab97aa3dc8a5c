//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod bookmark_repo;
pub mod comment_repo;
pub mod idea_repo;
pub mod requirement_repo;
pub mod share_repo;
pub mod user_repo;

pub use bookmark_repo::BookmarkRepo;
pub use comment_repo::CommentRepo;
pub use idea_repo::IdeaRepo;
pub use requirement_repo::RequirementRepo;
pub use share_repo::ShareRepo;
pub use user_repo::UserRepo;
