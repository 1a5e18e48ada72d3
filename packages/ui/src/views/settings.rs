//! Shared settings view.

use dioxus::prelude::*;

use crate::icons::{FaCircleHalfStroke, FaMoon, FaSun};
use crate::Icon;
use crate::{apply_theme, ThemeSignal};

#[component]
pub fn SettingsView() -> Element {
    rsx! {
        div {
            class: "settings-view",
            h2 { "Settings" }

            section {
                h3 { "Appearance" }
                ThemeSelector {}
            }
        }
    }
}

#[component]
fn ThemeSelector() -> Element {
    let mut theme = use_context::<ThemeSignal>();

    let current = theme().unwrap_or_default();
    let is_system = current.is_empty();
    let is_light = current == "light";
    let is_dark = current == "dark";

    let radio_class = |active: bool| {
        if active {
            "theme-card theme-card-active"
        } else {
            "theme-card"
        }
    };

    rsx! {
        div {
            class: "theme-cards",
            label {
                class: radio_class(is_system),
                onclick: move |_| {
                    apply_theme(None);
                    theme.set(None);
                },
                Icon { icon: FaCircleHalfStroke, width: 14, height: 14 }
                span { "System" }
            }
            label {
                class: radio_class(is_light),
                onclick: move |_| {
                    apply_theme(Some("light"));
                    theme.set(Some("light".to_string()));
                },
                Icon { icon: FaSun, width: 14, height: 14 }
                span { "Light" }
            }
            label {
                class: radio_class(is_dark),
                onclick: move |_| {
                    apply_theme(Some("dark"));
                    theme.set(Some("dark".to_string()));
                },
                Icon { icon: FaMoon, width: 14, height: 14 }
                span { "Dark" }
            }
        }
        p {
            class: "view-muted",
            "Choose how Cleanix appears. System follows your OS preference."
        }
    }
}
