pub mod auth;
pub mod bookmarks;
pub mod comments;
pub mod ideas;
pub mod requirements;
pub mod shares;
pub mod users;
