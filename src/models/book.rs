//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Lending status of a book, mirrored from its open loan
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "book_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    Available,
    Borrowed,
}

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    pub created_at: DateTime<Utc>,
}

/// Create book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    /// Defaults to `available` when omitted
    #[serde(default)]
    pub status: BookStatus,
}

/// Update book request. This is a full replace: all three fields are
/// required, a partial body is rejected at deserialization.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: String,
    pub author: String,
    pub status: BookStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BookStatus::Available).unwrap(),
            "\"available\""
        );
        assert_eq!(
            serde_json::to_string(&BookStatus::Borrowed).unwrap(),
            "\"borrowed\""
        );
    }

    #[test]
    fn create_book_defaults_to_available() {
        let create: CreateBook =
            serde_json::from_str(r#"{"title":"Dune","author":"Herbert"}"#).unwrap();
        assert_eq!(create.status, BookStatus::Available);
    }

    #[test]
    fn update_book_rejects_partial_body() {
        let result = serde_json::from_str::<UpdateBook>(r#"{"title":"Dune"}"#);
        assert!(result.is_err());
    }
}
