//! Pure domain logic shared by the database, LLM and API crates.
//!
//! Nothing in here touches the network or the database.

pub mod error;
pub mod ideas;
pub mod llm_model;
pub mod ownership;
pub mod requirement_prompt;
pub mod types;
