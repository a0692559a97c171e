//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List the full catalog
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM book_catalog ORDER BY isbn")
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Get a book by ISBN
    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM book_catalog WHERE isbn = $1")
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Set the availability flag directly, bypassing the borrowing relationship
    pub async fn set_availability(&self, isbn: &str, available: bool) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE book_management SET availability_status = $1 WHERE isbn = $2",
        )
        .bind(available)
        .bind(isbn)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        Ok(())
    }
}
