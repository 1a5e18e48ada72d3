use dioxus::prelude::*;

use crate::notification_menu::NotificationBell;
use crate::{use_auth, LogoutButton};

/// Top bar for authenticated screens: brand, navigation links passed as
/// children, the notification bell, and the signed-in user.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "navbar",
            span { class: "navbar-brand", "Cleanix" }
            div {
                class: "navbar-links",
                {children}
            }
            div {
                class: "navbar-actions",
                NotificationBell {}
                if let Some(user) = auth().user {
                    span { class: "navbar-user", "{user.name}" }
                }
                LogoutButton { class: "navbar-logout" }
            }
        }
    }
}
