use client::FeedStatus;
use dioxus::prelude::*;

use crate::icons::{FaBell, FaCheckDouble};
use crate::notifications::{mark_all_as_read, mark_as_read, use_notifications};
use crate::Icon;

/// Bell button for the navbar: unread badge plus a dropdown with the feed.
#[component]
pub fn NotificationBell() -> Element {
    let feed = use_notifications();
    let mut open = use_signal(|| false);

    let unread = feed().unread_count();

    rsx! {
        div {
            class: "notification-bell",
            button {
                class: "notification-bell-button",
                title: "Notifications",
                onclick: move |_| open.set(!open()),
                Icon { icon: FaBell, width: 16, height: 16 }
                if unread > 0 {
                    span { class: "notification-badge", "{unread}" }
                }
            }
            if open() {
                NotificationMenu {}
            }
        }
    }
}

#[component]
fn NotificationMenu() -> Element {
    let feed = use_notifications();
    let state = feed();

    let body = if state.status() == FeedStatus::Failed {
        rsx! {
            div { class: "notification-empty notification-error", "Couldn't load notifications" }
        }
    } else if state.entries().is_empty() && state.is_loading() {
        rsx! {
            div { class: "notification-empty", "Loading..." }
        }
    } else if state.entries().is_empty() {
        rsx! {
            div { class: "notification-empty", "You're all caught up" }
        }
    } else {
        rsx! {
            for entry in state.entries().iter().cloned() {
                NotificationItem { key: "{entry.id}", entry }
            }
        }
    };

    rsx! {
        div {
            class: "notification-menu",
            div {
                class: "notification-menu-header",
                span { "Notifications" }
                button {
                    class: "notification-mark-all",
                    onclick: move |_| async move {
                        mark_all_as_read(feed).await;
                    },
                    Icon { icon: FaCheckDouble, width: 12, height: 12 }
                    span { "Mark all read" }
                }
            }
            div {
                class: "notification-menu-entries",
                {body}
            }
        }
    }
}

#[component]
fn NotificationItem(entry: client::Notification) -> Element {
    let feed = use_notifications();
    let id = entry.id;

    rsx! {
        div {
            class: if entry.read { "notification-item" } else { "notification-item unread" },
            onclick: move |_| async move {
                mark_as_read(feed, id).await;
            },
            div { class: "notification-message", "{entry.message}" }
            div { class: "notification-date", "{entry.date}" }
        }
    }
}
