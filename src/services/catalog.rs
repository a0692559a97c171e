//! Catalog service for book reads and availability updates

use crate::{error::AppResult, models::book::Book, repository::Repository};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Check store connectivity, for the readiness probe
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.repository.pool)
            .await?;
        Ok(())
    }

    /// List the full book catalog
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get a book by ISBN
    pub async fn get_book(&self, isbn: &str) -> AppResult<Book> {
        self.repository.books.get_by_isbn(isbn).await
    }

    /// Set a book's availability flag directly.
    ///
    /// Bypasses the borrowing relationship entirely, so staff corrections
    /// (lost book, manual return) can disagree with the state the borrowing
    /// flow maintains.
    pub async fn set_availability(&self, isbn: &str, available: bool) -> AppResult<()> {
        self.repository.books.set_availability(isbn, available).await
    }
}
