//! Loan model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Loan model from database. A loan is open while `returned_date` is NULL.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Loan {
    pub id: i32,
    pub name: String,
    pub book_id: i32,
    pub issue_date: DateTime<Utc>,
    pub returned_date: Option<DateTime<Utc>>,
}

/// Loan joined with its book's title and author for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LoanDetails {
    pub id: i32,
    pub name: String,
    pub book_id: i32,
    pub title: String,
    pub author: String,
    pub issue_date: DateTime<Utc>,
    pub returned_date: Option<DateTime<Utc>>,
}

/// Create loan request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLoan {
    /// Borrower name
    pub name: String,
    /// Book to borrow
    pub book_id: i32,
}
