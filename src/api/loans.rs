//! Loan endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, LoanDetails},
};

use super::MessageResponse;

/// Created loan response
#[derive(Serialize, ToSchema)]
pub struct LoanCreatedResponse {
    /// Loan ID
    pub id: i32,
    /// Borrower name
    pub name: String,
    /// Borrowed book
    pub book_id: i32,
    /// Server time the loan was issued
    pub issue_date: DateTime<Utc>,
}

/// List all loans with book details, newest first
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "List of loans", body = Vec<LoanDetails>)
    )
)]
pub async fn list_loans(State(state): State<crate::AppState>) -> AppResult<Json<Vec<LoanDetails>>> {
    let loans = state.services.loans.list_loans().await?;
    Ok(Json(loans))
}

/// Issue a new loan (borrow a book)
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan issued", body = LoanCreatedResponse),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book is already borrowed")
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateLoan>,
) -> AppResult<(StatusCode, Json<LoanCreatedResponse>)> {
    let loan = state.services.loans.issue_loan(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(LoanCreatedResponse {
            id: loan.id,
            name: loan.name,
            book_id: loan.book_id,
            issue_date: loan.issue_date,
        }),
    ))
}

/// Return a borrowed book
#[utoipa::path(
    put,
    path = "/loans/{id}/return",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = MessageResponse),
        (status = 404, description = "Loan not found"),
        (status = 409, description = "Loan already returned")
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    Path(loan_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.loans.return_loan(loan_id).await?;
    Ok(Json(MessageResponse::new("Book returned")))
}
