//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;

use crate::{
    config::{AuthConfig, BootstrapConfig},
    error::{AppError, AppResult},
    models::account::{Claims, Role, StaffAccount},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate by login and return a JWT token with the account
    pub async fn authenticate(&self, login: &str, password: &str) -> AppResult<(String, StaffAccount)> {
        let account = self
            .repository
            .accounts
            .get_by_login(login)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid login or password".to_string()))?;

        if !self.verify_password(&account, password)? {
            return Err(AppError::Authentication(
                "Invalid login or password".to_string(),
            ));
        }

        let token = self.create_token(&account)?;

        Ok((token, account))
    }

    /// Create a JWT token for an account
    pub fn create_token(&self, account: &StaffAccount) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = Claims {
            sub: account.login.clone(),
            account_id: account.id,
            role: account.role,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    fn verify_password(&self, account: &StaffAccount, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&account.password)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Seed the viewer and staff accounts on an empty staff_accounts table
    pub async fn ensure_default_accounts(&self, bootstrap: &BootstrapConfig) -> AppResult<()> {
        if !bootstrap.enabled {
            return Ok(());
        }

        if self.repository.accounts.count().await? > 0 {
            return Ok(());
        }

        let viewer_hash = self.hash_password(&bootstrap.viewer_password)?;
        self.repository
            .accounts
            .create(&bootstrap.viewer_login, &viewer_hash, Role::Viewer)
            .await?;

        let staff_hash = self.hash_password(&bootstrap.staff_password)?;
        self.repository
            .accounts
            .create(&bootstrap.staff_login, &staff_hash, Role::Staff)
            .await?;

        tracing::info!(
            "Seeded default accounts '{}' and '{}'",
            bootstrap.viewer_login,
            bootstrap.staff_login
        );

        Ok(())
    }
}
