//! # API crate — shared fullstack server functions for Cleanix
//!
//! This crate is the backbone of the Cleanix fullstack architecture. It
//! defines every Dioxus server function the web frontend calls, along with
//! the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Argon2 password hashing/verification and session keys |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database models (`User`, `NotificationRow`) and their client-safe projections |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` or `#[post(...)]` and compiled twice: once
//! with full server logic (behind `#[cfg(feature = "server")]`) and once as
//! a thin client stub that simply forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login`, `logout`,
//!   `request_password_reset`, `reset_password`
//! - **Notifications**: `list_notifications`, `mark_notification_read`,
//!   `mark_all_notifications_read`
//! - **User management** (supervisor only): `list_users`, `create_user`,
//!   `delete_user`

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;

pub use client::{Notification, NotificationPage};
pub use models::UserInfo;

/// Notifications returned per page by [`list_notifications`].
pub const NOTIFICATIONS_PAGE_SIZE: i64 = 20;

const MIN_PASSWORD_LEN: usize = 8;

/// Load the authenticated user behind the session, or fail.
#[cfg(feature = "server")]
async fn session_user(
    session: &tower_sessions::Session,
) -> Result<models::User, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    user.ok_or_else(|| ServerFnError::new("Not authenticated"))
}

#[cfg(feature = "server")]
async fn require_supervisor(
    session: &tower_sessions::Session,
) -> Result<models::User, ServerFnError> {
    let user = session_user(session).await?;
    if !user.is_supervisor() {
        return Err(ServerFnError::new("Supervisor access required"));
    }
    Ok(user)
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new client or freelancer account.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    name: String,
    role: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }
    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    if !models::user::is_registerable_role(&role) {
        return Err(ServerFnError::new("Role must be client or freelancer"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if the email is already taken
    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT 1 as n FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password)
        .map_err(|e| ServerFnError::new(e))?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, name, role, password_hash) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&email)
    .bind(&name)
    .bind(&role)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Supervisors see new signups in their feed
    models::notification::notify_role(
        pool,
        models::user::ROLE_SUPERVISOR,
        &format!("New {} registered: {}", user.role, user.name),
    )
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
    role: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Start a password reset for the given email.
///
/// Always succeeds so the endpoint does not reveal which emails exist.
/// Token delivery is out of band; the token is surfaced in the server log
/// for the operator.
#[cfg(feature = "server")]
#[post("/api/auth/request-reset")]
pub async fn request_password_reset(email: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;
    use rand::distributions::Alphanumeric;
    use rand::Rng;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();

    let updated = sqlx::query(
        "UPDATE users SET reset_token = $1, reset_requested_at = NOW() WHERE email = $2",
    )
    .bind(&token)
    .bind(&email)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if updated.rows_affected() > 0 {
        tracing::info!("password reset token issued for {email}: {token}");
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/request-reset")]
pub async fn request_password_reset(email: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Complete a password reset using a previously issued token.
///
/// Tokens are single-use and expire one hour after they were requested.
#[cfg(feature = "server")]
#[post("/api/auth/reset-password")]
pub async fn reset_password(token: String, password: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    if password.len() < MIN_PASSWORD_LEN {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let password_hash = auth::hash_password(&password)
        .map_err(|e| ServerFnError::new(e))?;

    let updated = sqlx::query(
        "UPDATE users SET password_hash = $1, reset_token = NULL, reset_requested_at = NULL, updated_at = NOW()
         WHERE reset_token = $2 AND reset_requested_at > NOW() - INTERVAL '1 hour'",
    )
    .bind(&password_hash)
    .bind(token.trim())
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if updated.rows_affected() == 0 {
        return Err(ServerFnError::new("Invalid or expired reset token"));
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/reset-password")]
pub async fn reset_password(token: String, password: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the session user's notifications, newest first.
#[cfg(feature = "server")]
#[get("/api/notifications/:page", session: tower_sessions::Session)]
pub async fn list_notifications(page: u32) -> Result<NotificationPage, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::NotificationRow;

    let user = session_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let page = page.max(1);

    let (total,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM notifications WHERE user_id = $1")
            .bind(user.id)
            .fetch_one(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<NotificationRow> = sqlx::query_as(
        "SELECT * FROM notifications WHERE user_id = $1
         ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3",
    )
    .bind(user.id)
    .bind(NOTIFICATIONS_PAGE_SIZE)
    .bind((page as i64 - 1) * NOTIFICATIONS_PAGE_SIZE)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let last_page =
        ((total + NOTIFICATIONS_PAGE_SIZE - 1) / NOTIFICATIONS_PAGE_SIZE).max(1) as u32;

    Ok(NotificationPage {
        data: rows.iter().map(|r| r.to_info()).collect(),
        current_page: page,
        last_page,
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/notifications/:page")]
pub async fn list_notifications(page: u32) -> Result<NotificationPage, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Mark one of the session user's notifications as read.
#[cfg(feature = "server")]
#[post("/api/notifications/:id/read", session: tower_sessions::Session)]
pub async fn mark_notification_read(id: i64) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user = session_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "UPDATE notifications SET read_at = NOW() WHERE id = $1 AND user_id = $2 AND read_at IS NULL",
    )
    .bind(id)
    .bind(user.id)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/notifications/:id/read")]
pub async fn mark_notification_read(id: i64) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Mark every notification of the session user as read.
#[cfg(feature = "server")]
#[post("/api/notifications/read-all", session: tower_sessions::Session)]
pub async fn mark_all_notifications_read() -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user = session_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE notifications SET read_at = NOW() WHERE user_id = $1 AND read_at IS NULL")
        .bind(user.id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/notifications/read-all")]
pub async fn mark_all_notifications_read() -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List every account. Supervisor only.
#[cfg(feature = "server")]
#[get("/api/users", session: tower_sessions::Session)]
pub async fn list_users() -> Result<Vec<UserInfo>, ServerFnError> {
    use crate::db::get_pool;

    require_supervisor(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let users: Vec<models::User> =
        sqlx::query_as("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(users.iter().map(|u| u.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/users")]
pub async fn list_users() -> Result<Vec<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Provision a new account with a supervisor-supplied password.
/// Supervisor only.
#[cfg(feature = "server")]
#[post("/api/users", session: tower_sessions::Session)]
pub async fn create_user(
    email: String,
    name: String,
    role: String,
    password: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    require_supervisor(&session).await?;

    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    if !models::user::is_valid_role(&role) {
        return Err(ServerFnError::new("Unknown role"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT 1 as n FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password)
        .map_err(|e| ServerFnError::new(e))?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, name, role, password_hash) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&email)
    .bind(&name)
    .bind(&role)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    models::notification::notify(
        pool,
        user.id,
        "Welcome to Cleanix! A supervisor created your account.",
    )
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/users")]
pub async fn create_user(
    email: String,
    name: String,
    role: String,
    password: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete an account. Supervisor only; self-deletion is rejected.
#[cfg(feature = "server")]
#[post("/api/users/:id/delete", session: tower_sessions::Session)]
pub async fn delete_user(id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let supervisor = require_supervisor(&session).await?;

    let user_uuid = uuid::Uuid::parse_str(&id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if user_uuid == supervisor.id {
        return Err(ServerFnError::new("Cannot delete your own account"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_uuid)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/users/:id/delete")]
pub async fn delete_user(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
