//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads for the session endpoint,
//! the pet catalog and the admin console so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Shortest username the server accepts at registration.
pub const MIN_USERNAME_LEN: usize = 3;
/// Shortest password the server accepts at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Role classifier carried by every principal.
///
/// Serialized as `"user"` / `"admin"` to match the server's role column;
/// `"standard"` is accepted on input as an alias.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "user", alias = "standard")]
    Standard,
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// The signed-in actor returned by `/api/user`, `/api/login` and `/api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Unique user identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Contact address.
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/register`. The server always assigns the standard role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub email: String,
    pub name: String,
}

/// One row of `GET /api/admin/security-logs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityLogEntry {
    pub id: i64,
    /// Machine-readable action (`login`, `login_failed`, `user_created`, ...).
    pub action: String,
    pub user_id: Option<i64>,
    pub details: Option<String>,
    /// RFC 3339 timestamp.
    pub timestamp: String,
    pub ip_address: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
    Other,
}

impl PetType {
    pub const ALL: [Self; 3] = [Self::Dog, Self::Cat, Self::Other];

    /// Wire value, also used as the `type` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Fostered,
    Adopted,
}

impl PetStatus {
    pub const ALL: [Self; 3] = [Self::Available, Self::Fostered, Self::Adopted];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Fostered => "fostered",
            Self::Adopted => "adopted",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// One animal from `GET /api/pets`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PetType,
    pub breed: String,
    /// Age in years.
    pub age: u32,
    pub gender: String,
    pub status: PetStatus,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub traits: Vec<String>,
}

/// Browse-page filter. Empty fields are left out of the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PetFilter {
    pub kind: Option<PetType>,
    pub status: Option<PetStatus>,
    pub breed: String,
}

impl PetFilter {
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(kind) = self.kind {
            pairs.push(("type", kind.as_str().to_owned()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        let breed = self.breed.trim();
        if !breed.is_empty() {
            pairs.push(("breed", breed.to_owned()));
        }
        pairs
    }
}

/// Body of `POST /api/admin/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Body of `PATCH /api/admin/users/{id}`. `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Body of `GET /api/admin/dashboard-stats`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub active_users: usize,
    pub admins: usize,
    pub total_pets: usize,
    pub available_pets: usize,
    pub fostered_pets: usize,
    pub adopted_pets: usize,
    pub recent_security_events: Vec<SecurityLogEntry>,
}
