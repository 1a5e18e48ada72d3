//! Dashboard landing: greeting plus a feed summary.

use dioxus::prelude::*;
use ui::{use_auth, use_notifications};

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let feed = use_notifications();

    let greeting = match auth().user {
        Some(user) => format!("Welcome back, {}", user.name),
        None => "Welcome".to_string(),
    };

    let unread = feed().unread_count();
    let summary = match unread {
        0 => "You're all caught up.".to_string(),
        1 => "You have 1 unread notification.".to_string(),
        n => format!("You have {n} unread notifications."),
    };

    rsx! {
        div {
            class: "dashboard-view",
            h2 { "{greeting}" }
            p { class: "dashboard-summary", "{summary}" }
        }
    }
}
