//! Loan management service

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, Loan, LoanDetails},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all loans with book details, newest first
    pub async fn list_loans(&self) -> AppResult<Vec<LoanDetails>> {
        self.repository.loans.list().await
    }

    /// Issue a new loan (borrow a book)
    pub async fn issue_loan(&self, loan: CreateLoan) -> AppResult<Loan> {
        let created = self.repository.loans.create(&loan).await?;
        tracing::info!(
            "Issued loan id={} book_id={} to {:?}",
            created.id,
            created.book_id,
            created.name
        );
        Ok(created)
    }

    /// Return a borrowed book
    pub async fn return_loan(&self, loan_id: i32) -> AppResult<Loan> {
        let returned = self.repository.loans.return_loan(loan_id).await?;
        tracing::info!("Returned loan id={} book_id={}", returned.id, returned.book_id);
        Ok(returned)
    }
}
