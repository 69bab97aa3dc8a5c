//! Idea input validation and listing limits.

use crate::error::CoreError;

/// Maximum length of an idea title in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum length of a comment body in characters.
pub const MAX_COMMENT_LENGTH: usize = 10_000;

/// Default page size when listing ideas.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Upper bound on the page size when listing ideas.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Validate an idea title: non-blank and at most [`MAX_TITLE_LENGTH`] characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Idea title must not be empty".to_string(),
        ));
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Idea title exceeds maximum length of {MAX_TITLE_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate an idea body: must contain something besides whitespace.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Idea content must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a comment body: non-blank and within [`MAX_COMMENT_LENGTH`].
pub fn validate_comment(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Comment must not be empty".to_string(),
        ));
    }
    let len = content.chars().count();
    if len > MAX_COMMENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Comment exceeds maximum length of {MAX_COMMENT_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Clamp a requested page size into `1..=MAX_LIST_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT)
}

/// Clamp a requested offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
