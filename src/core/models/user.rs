use crate::core::tokener::Payload;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub salt: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub email: String,
    pub password: String,
    pub salt: String,
    pub name: String,
    pub role: Role,
}

/// The public view of a user; never carries credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Register {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Login {
    pub email: String,
    pub password: String,
}

/// Admin account created at startup when configured.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: Profile,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Claim {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub exp: i64,
}

impl Claim {
    pub fn new(user: &User, ttl: Duration) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            exp: (Utc::now() + ttl).timestamp(),
        }
    }
}

impl Payload for Claim {
    fn subject(&self) -> &str {
        &self.id
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
