//! Loans repository for database operations
//!
//! Issue and return each run as a single transaction so a book's status and
//! its open loan can never disagree after a partial failure.

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::BookStatus,
        loan::{CreateLoan, Loan, LoanDetails},
    },
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all loans joined with their book's title and author,
    /// newest first
    pub async fn list(&self) -> AppResult<Vec<LoanDetails>> {
        let loans = sqlx::query_as::<_, LoanDetails>(
            r#"
            SELECT l.id, l.name, l.book_id, b.title, b.author,
                   l.issue_date, l.returned_date
            FROM loans l
            JOIN books b ON l.book_id = b.id
            ORDER BY l.issue_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(loans)
    }

    /// Issue a new loan
    ///
    /// Flips the book to `borrowed` with a conditional update, then inserts
    /// the open loan record. Zero rows from the conditional update means the
    /// book is missing or already out; under concurrent issues for the same
    /// book the row lock serializes them and exactly one succeeds.
    pub async fn create(&self, loan: &CreateLoan) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        let flipped = sqlx::query("UPDATE books SET status = $1 WHERE id = $2 AND status = $3")
            .bind(BookStatus::Borrowed)
            .bind(loan.book_id)
            .bind(BookStatus::Available)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if flipped == 0 {
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                    .bind(loan.book_id)
                    .fetch_one(&mut *tx)
                    .await?;

            return Err(if exists {
                AppError::Conflict(format!("Book with id {} is already borrowed", loan.book_id))
            } else {
                AppError::NotFound(format!("Book with id {} not found", loan.book_id))
            });
        }

        let created = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (name, book_id, issue_date)
            VALUES ($1, $2, $3)
            RETURNING id, name, book_id, issue_date, returned_date
            "#,
        )
        .bind(&loan.name)
        .bind(loan.book_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(created)
    }

    /// Return a loan
    ///
    /// Stamps the loan's returned_date and puts the book back to
    /// `available` in the same transaction. Already-returned loans are
    /// rejected, a second return never re-stamps the record.
    pub async fn return_loan(&self, loan_id: i32) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        let loan = sqlx::query_as::<_, Loan>(
            "SELECT id, name, book_id, issue_date, returned_date FROM loans WHERE id = $1 FOR UPDATE",
        )
        .bind(loan_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", loan_id)))?;

        if loan.returned_date.is_some() {
            return Err(AppError::Conflict(format!(
                "Loan with id {} is already returned",
                loan_id
            )));
        }

        let returned = sqlx::query_as::<_, Loan>(
            r#"
            UPDATE loans SET returned_date = $1 WHERE id = $2
            RETURNING id, name, book_id, issue_date, returned_date
            "#,
        )
        .bind(Utc::now())
        .bind(loan_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE books SET status = $1 WHERE id = $2")
            .bind(BookStatus::Available)
            .bind(loan.book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(returned)
    }
}
