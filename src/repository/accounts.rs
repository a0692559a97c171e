//! Staff accounts repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::account::{Role, StaffAccount},
};

#[derive(Clone)]
pub struct AccountsRepository {
    pool: Pool<Postgres>,
}

impl AccountsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get an account by login
    pub async fn get_by_login(&self, login: &str) -> AppResult<Option<StaffAccount>> {
        let account = sqlx::query_as::<_, StaffAccount>(
            "SELECT * FROM staff_accounts WHERE LOWER(login) = LOWER($1)",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Count accounts
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM staff_accounts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Create an account with an already-hashed password
    pub async fn create(&self, login: &str, password_hash: &str, role: Role) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO staff_accounts (login, password, role)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(login)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
