//! Admin authentication: credential checks and password management.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::application::error::AppError;
use crate::application::repos::AdminUserRepo;
use crate::domain::entities::AdminUserRecord;

const MIN_PASSWORD_LEN: usize = 6;

pub struct AuthService {
    admins: Arc<dyn AdminUserRepo>,
}

impl AuthService {
    pub fn new(admins: Arc<dyn AdminUserRepo>) -> Self {
        Self { admins }
    }

    /// Check a login attempt. A missing user and a wrong password are
    /// indistinguishable to the caller.
    pub async fn verify_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AdminUserRecord>, AppError> {
        let Some(user) = self.admins.find_by_username(username.trim()).await? else {
            return Ok(None);
        };
        if verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    pub async fn create_admin(&self, username: &str, password: &str) -> Result<(), AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::validation("username is required"));
        }
        check_password_strength(password)?;
        let hash = hash_password(password)?;
        Ok(self.admins.create(username, &hash).await?)
    }

    pub async fn change_password(
        &self,
        username: &str,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<(), AppError> {
        let Some(user) = self.verify_login(username, current).await? else {
            return Err(AppError::validation("current password is incorrect"));
        };
        if new != confirm {
            return Err(AppError::validation("new passwords do not match"));
        }
        check_password_strength(new)?;
        let hash = hash_password(new)?;
        Ok(self.admins.update_password(user.id, &hash).await?)
    }
}

fn check_password_strength(password: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AppError::unexpected(format!("password hashing failed: {err}")))
}

fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|err| AppError::unexpected(format!("stored hash is invalid: {err}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::FakeStore;

    fn service(store: &FakeStore) -> AuthService {
        AuthService::new(store.admins())
    }

    #[tokio::test]
    async fn login_round_trip() {
        let store = FakeStore::seeded();
        let auth = service(&store);
        auth.create_admin("editor", "correct horse").await.unwrap();

        assert!(auth
            .verify_login("editor", "correct horse")
            .await
            .unwrap()
            .is_some());
        assert!(auth
            .verify_login("editor", "wrong horse")
            .await
            .unwrap()
            .is_none());
        assert!(auth
            .verify_login("nobody", "correct horse")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn password_length_floor_is_six() {
        let store = FakeStore::seeded();
        let auth = service(&store);
        let err = auth.create_admin("editor", "short").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        auth.create_admin("editor", "secret").await.unwrap();
        assert!(auth
            .verify_login("editor", "secret")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn change_password_requires_current_and_matching_confirm() {
        let store = FakeStore::seeded();
        let auth = service(&store);
        auth.create_admin("editor", "first secret").await.unwrap();

        let err = auth
            .change_password("editor", "wrong", "second secret", "second secret")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = auth
            .change_password("editor", "first secret", "second secret", "mismatch!")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        auth.change_password("editor", "first secret", "second secret", "second secret")
            .await
            .unwrap();
        assert!(auth
            .verify_login("editor", "second secret")
            .await
            .unwrap()
            .is_some());
        assert!(auth
            .verify_login("editor", "first secret")
            .await
            .unwrap()
            .is_none());
    }
}
