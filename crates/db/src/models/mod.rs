//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where updates exist

pub mod bookmark;
pub mod comment;
pub mod idea;
pub mod requirement;
pub mod share;
pub mod user;
