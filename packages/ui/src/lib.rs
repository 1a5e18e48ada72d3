//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

pub mod notifications;
pub use notifications::{use_notifications, NotificationsProvider};

mod notification_menu;
pub use notification_menu::NotificationBell;

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, ThemeSignal};

pub mod storage;

mod password_input;
pub use password_input::GeneratedPasswordInput;

mod navbar;
pub use navbar::Navbar;

pub mod views;
