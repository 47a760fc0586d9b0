//! User accounts and password verification.
//!
//! DESIGN
//! ======
//! Accounts live in a `tokio::sync::RwLock`-guarded map keyed by id, with a
//! username index. Passwords are stored only as Argon2 PHC strings. Hashing
//! and verification run outside the lock.

use std::collections::HashMap;
use std::sync::OnceLock;

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

pub use client::net::types::{MIN_PASSWORD_LEN, MIN_USERNAME_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Account data safe to send to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Fields accepted when creating an account.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("username is already taken")]
    UsernameTaken,
    #[error("{0}")]
    Invalid(&'static str),
    #[error("user not found")]
    NotFound,
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Partial profile update from the admin console. Absent fields are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

struct UserRecord {
    user: PublicUser,
    password_hash: String,
}

#[derive(Default)]
struct Accounts {
    next_id: i64,
    by_id: HashMap<i64, UserRecord>,
    by_username: HashMap<String, i64>,
}

#[derive(Default)]
pub struct UserDirectory {
    accounts: RwLock<Accounts>,
}

impl UserDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account with `role`.
    ///
    /// # Errors
    ///
    /// `Invalid` for a field that fails validation, `UsernameTaken` when the
    /// username exists, `Hash` if Argon2 fails.
    pub async fn create(&self, new_user: NewUser, role: Role) -> Result<PublicUser, UserError> {
        let new_user = validate(new_user)?;
        let password_hash = hash_password(&new_user.password)?;

        let mut accounts = self.accounts.write().await;
        if accounts.by_username.contains_key(&new_user.username) {
            return Err(UserError::UsernameTaken);
        }
        accounts.next_id += 1;
        let id = accounts.next_id;
        let user = PublicUser { id, username: new_user.username, name: new_user.name, email: new_user.email, role };
        accounts.by_username.insert(user.username.clone(), id);
        accounts
            .by_id
            .insert(id, UserRecord { user: user.clone(), password_hash });
        Ok(user)
    }

    /// Check a username/password pair. `None` covers both unknown username
    /// and wrong password; both paths run one Argon2 verification.
    pub async fn authenticate(&self, username: &str, password: &str) -> Option<PublicUser> {
        let found = {
            let accounts = self.accounts.read().await;
            accounts
                .by_username
                .get(username.trim())
                .and_then(|id| accounts.by_id.get(id))
                .map(|record| (record.user.clone(), record.password_hash.clone()))
        };
        let Some((user, hash)) = found else {
            let _ = verify_password(password, dummy_hash());
            return None;
        };
        verify_password(password, &hash).then_some(user)
    }

    pub async fn get(&self, id: i64) -> Option<PublicUser> {
        self.accounts.read().await.by_id.get(&id).map(|r| r.user.clone())
    }

    pub async fn count(&self) -> usize {
        self.accounts.read().await.by_id.len()
    }

    pub async fn count_role(&self, role: Role) -> usize {
        self.accounts
            .read()
            .await
            .by_id
            .values()
            .filter(|r| r.user.role == role)
            .count()
    }

    /// Every account, ordered by id.
    pub async fn list(&self) -> Vec<PublicUser> {
        let accounts = self.accounts.read().await;
        let mut users: Vec<PublicUser> = accounts.by_id.values().map(|r| r.user.clone()).collect();
        users.sort_by_key(|u| u.id);
        users
    }

    /// Apply `update` to account `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Invalid` for an empty name or an email
    /// without `@`.
    pub async fn update(&self, id: i64, update: UserUpdate) -> Result<PublicUser, UserError> {
        let name = update.name.map(|n| n.trim().to_owned());
        let email = update.email.map(|e| e.trim().to_owned());
        if name.as_deref().is_some_and(str::is_empty) {
            return Err(UserError::Invalid("name is required"));
        }
        if email.as_deref().is_some_and(|e| !e.contains('@')) {
            return Err(UserError::Invalid("email address is invalid"));
        }

        let mut accounts = self.accounts.write().await;
        let record = accounts.by_id.get_mut(&id).ok_or(UserError::NotFound)?;
        if let Some(name) = name {
            record.user.name = name;
        }
        if let Some(email) = email {
            record.user.email = email;
        }
        if let Some(role) = update.role {
            record.user.role = role;
        }
        Ok(record.user.clone())
    }

    /// Remove account `id`, returning what was removed.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub async fn delete(&self, id: i64) -> Result<PublicUser, UserError> {
        let mut accounts = self.accounts.write().await;
        let record = accounts.by_id.remove(&id).ok_or(UserError::NotFound)?;
        accounts.by_username.remove(&record.user.username);
        Ok(record.user)
    }
}

fn validate(new_user: NewUser) -> Result<NewUser, UserError> {
    let username = new_user.username.trim().to_owned();
    let email = new_user.email.trim().to_owned();
    let name = new_user.name.trim().to_owned();
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(UserError::Invalid("username is too short"));
    }
    if new_user.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(UserError::Invalid("password is too short"));
    }
    if !email.contains('@') {
        return Err(UserError::Invalid("email address is invalid"));
    }
    if name.is_empty() {
        return Err(UserError::Invalid("name is required"));
    }
    Ok(NewUser { username, password: new_user.password, email, name })
}

/// Hash `password` into an Argon2 PHC string with a fresh random salt.
pub(crate) fn hash_password(password: &str) -> Result<String, UserError> {
    let salt_bytes: [u8; 16] = rand::rng().random();
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| UserError::Hash(e.to_string()))?;
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|phc| phc.to_string())
        .map_err(|e| UserError::Hash(e.to_string()))
}

/// Hash checked when the username is unknown, so a miss costs the same as
/// a wrong password.
pub(crate) fn dummy_hash() -> &'static str {
    static VALUE: OnceLock<String> = OnceLock::new();
    VALUE.get_or_init(|| hash_password("not-a-real-account-password").unwrap_or_default())
}

pub(crate) fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
