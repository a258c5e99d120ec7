//! Form validation errors shared by the inventory, directory and settings forms

use thiserror::Error;

/// Upper bound for an uploaded avatar image (5 MiB)
pub const MAX_AVATAR_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("please enter a valid email")]
    InvalidEmail,

    #[error("file size must be less than 5MB (got {size} bytes)")]
    FileTooLarge { size: u64 },

    #[error("please upload an image file (got {mime})")]
    NotAnImage { mime: String },

    #[error("no record with id {id}")]
    NotFound { id: String },
}

/// Reject empty or whitespace-only input
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

/// Required field that must also look like an email address
pub fn require_email(value: &str) -> Result<(), ValidationError> {
    require("email", value)?;
    if !value.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
