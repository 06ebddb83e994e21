//! API handlers for Shelfmark REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;

use serde::Serialize;
use utoipa::ToSchema;

/// Confirmation body for operations that don't return a record
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
