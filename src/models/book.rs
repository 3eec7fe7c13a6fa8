//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Book record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Store-assigned identifier, immutable after creation
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(custom(function = "non_blank", message = "Title cannot be empty"))]
    pub title: String,
    #[validate(custom(function = "non_blank", message = "Author cannot be empty"))]
    pub author: String,
    #[validate(custom(function = "non_blank", message = "Description cannot be empty"))]
    pub description: String,
}

/// Update book request. All three mutable fields are overwritten.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(custom(function = "non_blank", message = "Title cannot be empty"))]
    pub title: String,
    #[validate(custom(function = "non_blank", message = "Author cannot be empty"))]
    pub author: String,
    #[validate(custom(function = "non_blank", message = "Description cannot be empty"))]
    pub description: String,
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("non_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_book_accepts_populated_fields() {
        let data = CreateBook {
            title: "Test Title".to_string(),
            author: "Test Author".to_string(),
            description: "Test Description".to_string(),
        };
        assert!(data.validate().is_ok());
    }

    #[test]
    fn create_book_rejects_whitespace_only_fields() {
        let data = CreateBook {
            title: "  ".to_string(),
            author: "Test Author".to_string(),
            description: "Test Description".to_string(),
        };
        let errors = data.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }
}
