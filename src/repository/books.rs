//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books ordered by title
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, status, created_at FROM books ORDER BY title",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Create a new book
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, status)
            VALUES ($1, $2, $3)
            RETURNING id, title, author, status, created_at
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Update a book. Full replace of title, author and status.
    pub async fn update(&self, id: i32, book: &UpdateBook) -> AppResult<()> {
        let result = sqlx::query("UPDATE books SET title = $1, author = $2, status = $3 WHERE id = $4")
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        Ok(())
    }

    /// Delete a book. Rejected while the book has an open loan; closed loan
    /// history goes with the book (FK cascade).
    ///
    /// Locks the book row before the open-loan check, same lock order as
    /// issue, so a concurrent issue can never slip a fresh open loan in
    /// between the check and the delete.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query_scalar::<_, i32>("SELECT id FROM books WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        let on_loan: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM loans WHERE book_id = $1 AND returned_date IS NULL)",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if on_loan {
            return Err(AppError::Conflict(format!(
                "Book with id {} has an open loan and cannot be deleted",
                id
            )));
        }

        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
