//! Business logic services

pub mod auth;
pub mod borrowings;
pub mod catalog;
pub mod directory;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub directory: directory::DirectoryService,
    pub borrowings: borrowings::BorrowingsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            catalog: catalog::CatalogService::new(repository.clone()),
            directory: directory::DirectoryService::new(repository.clone()),
            borrowings: borrowings::BorrowingsService::new(repository),
        }
    }
}
