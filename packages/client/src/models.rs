//! # Wire models shared between the backend and the frontends
//!
//! These types are `Serialize + Deserialize + PartialEq` so they can cross
//! the server/client boundary via Dioxus server functions. The backend owns
//! the data; the client holds a read-through cache of it (see
//! [`crate::feed::NotificationFeed`]).

use serde::{Deserialize, Serialize};

/// A single notification as served by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Human-readable message body.
    pub message: String,
    /// Display timestamp, formatted by the backend.
    pub date: String,
    /// Whether the recipient has seen this notification.
    pub read: bool,
}

/// One page of the backend notification listing, newest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationPage {
    pub data: Vec<Notification>,
    pub current_page: u32,
    pub last_page: u32,
}
