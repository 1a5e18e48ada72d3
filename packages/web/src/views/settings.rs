use dioxus::prelude::*;
use ui::views::SettingsView;

/// Settings page.
#[component]
pub fn Settings() -> Element {
    rsx! {
        SettingsView {}
    }
}
