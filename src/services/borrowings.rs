//! Borrowing management service

use crate::{
    error::AppResult,
    models::borrowing::{BorrowingRecord, CreateBorrowing},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowingsService {
    repository: Repository,
}

impl BorrowingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all borrowings with customer and book details
    pub async fn list_borrowings(&self) -> AppResult<Vec<BorrowingRecord>> {
        self.repository.borrowings.list().await
    }

    /// Create a new borrowing (borrow a book)
    pub async fn create_borrowing(&self, borrowing: CreateBorrowing) -> AppResult<i32> {
        // Verify customer exists
        self.repository
            .customers
            .get_by_id(borrowing.customer_id)
            .await?;
        self.repository.borrowings.create(&borrowing).await
    }
}
