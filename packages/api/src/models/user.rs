//! # User model for marketplace accounts
//!
//! Defines the two representations of a Cleanix user:
//!
//! ## [`User`] (server only)
//!
//! The complete database row from the `users` table. It derives
//! [`sqlx::FromRow`] so it can be loaded directly from queries and contains
//! every column:
//!
//! - `id` — primary key (`UUID v4`).
//! - `email`, `name` — profile fields captured at registration.
//! - `role` — marketplace actor: `"client"`, `"freelancer"`, or
//!   `"supervisor"`.
//! - `password_hash` — Argon2 PHC string.
//! - `reset_token` / `reset_requested_at` — pending password-reset state.
//! - `created_at` / `updated_at` — audit timestamps.
//!
//! The [`User::to_info`] method projects this into a [`UserInfo`].
//!
//! ## [`UserInfo`]
//!
//! A client-safe subset that is `Serialize + Deserialize + PartialEq` and
//! can cross the server/client boundary via Dioxus server functions. It
//! omits the password hash, reset state, and timestamps, and converts the
//! `Uuid` to a `String` so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

pub const ROLE_CLIENT: &str = "client";
pub const ROLE_FREELANCER: &str = "freelancer";
pub const ROLE_SUPERVISOR: &str = "supervisor";

/// Roles self-registration may choose. Supervisor accounts are provisioned
/// by an existing supervisor from the user-management screen.
pub fn is_registerable_role(role: &str) -> bool {
    matches!(role, ROLE_CLIENT | ROLE_FREELANCER)
}

pub fn is_valid_role(role: &str) -> bool {
    matches!(role, ROLE_CLIENT | ROLE_FREELANCER | ROLE_SUPERVISOR)
}

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub password_hash: String,
    pub reset_token: Option<String>,
    pub reset_requested_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }

    pub fn is_supervisor(&self) -> bool {
        self.role == ROLE_SUPERVISOR
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}
