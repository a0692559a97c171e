//! Customers repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::customer::Customer,
};

#[derive(Clone)]
pub struct CustomersRepository {
    pool: Pool<Postgres>,
}

impl CustomersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List the full directory
    pub async fn list(&self) -> AppResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT * FROM customer_directory ORDER BY customer_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Get a customer by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customer_directory WHERE customer_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer with id {} not found", id)))
    }
}
