//! Borrowings repository for database operations
//!
//! Creation is the one transactional write in the system: the borrowing
//! insert and the availability flip on the book must commit together.

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::borrowing::{BorrowingRecord, CreateBorrowing},
};

#[derive(Clone)]
pub struct BorrowingsRepository {
    pool: Pool<Postgres>,
}

impl BorrowingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all borrowings joined with customer and book
    pub async fn list(&self) -> AppResult<Vec<BorrowingRecord>> {
        let records = sqlx::query_as::<_, BorrowingRecord>(
            "SELECT * FROM borrowing_status ORDER BY borrowing_date, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Create a new borrowing and mark the book unavailable, atomically.
    ///
    /// The book row is locked for the duration of the transaction, so a
    /// concurrent borrow of the same book waits here and then fails the
    /// availability check.
    pub async fn create(&self, borrowing: &CreateBorrowing) -> AppResult<i32> {
        let mut tx = self.pool.begin().await?;

        let available: Option<bool> = sqlx::query_scalar(
            "SELECT availability_status FROM book_management WHERE isbn = $1 FOR UPDATE",
        )
        .bind(&borrowing.isbn)
        .fetch_optional(&mut *tx)
        .await?;

        let available =
            available.ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        if !available {
            return Err(AppError::BusinessRule(
                "Book is not available".to_string(),
            ));
        }

        let borrowing_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO borrowing_management (customer_id, isbn, borrowing_date, return_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(borrowing.customer_id)
        .bind(&borrowing.isbn)
        .bind(borrowing.borrowing_date)
        .bind(borrowing.return_date)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE book_management SET availability_status = FALSE WHERE isbn = $1")
            .bind(&borrowing.isbn)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(borrowing_id)
    }
}
