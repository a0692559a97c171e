//! Repository layer for database operations

pub mod accounts;
pub mod books;
pub mod borrowings;
pub mod customers;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
    pub customers: customers::CustomersRepository,
    pub borrowings: borrowings::BorrowingsRepository,
    pub accounts: accounts::AccountsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            customers: customers::CustomersRepository::new(pool.clone()),
            borrowings: borrowings::BorrowingsRepository::new(pool.clone()),
            accounts: accounts::AccountsRepository::new(pool.clone()),
            pool,
        }
    }
}
