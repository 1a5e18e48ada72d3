use dioxus::prelude::*;
use ui::views::UsersView;

/// Supervisor user-management page.
#[component]
pub fn Users() -> Element {
    rsx! {
        UsersView {}
    }
}
