//! Directory service for customer reads

use crate::{error::AppResult, models::customer::Customer, repository::Repository};

#[derive(Clone)]
pub struct DirectoryService {
    repository: Repository,
}

impl DirectoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List the full customer directory
    pub async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        self.repository.customers.list().await
    }

    /// Get a customer by ID
    pub async fn get_customer(&self, id: i32) -> AppResult<Customer> {
        self.repository.customers.get_by_id(id).await
    }
}
