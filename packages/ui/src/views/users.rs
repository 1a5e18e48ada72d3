//! Supervisor user management: account table plus a provisioning dialog.

use api::UserInfo;
use dioxus::prelude::*;

use crate::icons::FaTrash;
use crate::GeneratedPasswordInput;
use crate::Icon;

/// Account table with client-side search and a "new user" dialog.
///
/// The list loads once at mount. Created accounts are appended locally,
/// deleted ones removed locally, so the table tracks the backend without a
/// reload round trip.
#[component]
pub fn UsersView() -> Element {
    let mut users = use_signal(Vec::<UserInfo>::new);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut search = use_signal(String::new);
    let mut show_create = use_signal(|| false);

    let _loader = use_resource(move || async move {
        match api::list_users().await {
            Ok(list) => users.set(list),
            Err(err) => load_error.set(Some(err.to_string())),
        }
    });

    let query = search().to_lowercase();
    let filtered: Vec<UserInfo> = users()
        .into_iter()
        .filter(|u| {
            query.is_empty()
                || u.name.to_lowercase().contains(&query)
                || u.email.to_lowercase().contains(&query)
        })
        .collect();

    rsx! {
        div {
            class: "users-view",
            div {
                class: "users-toolbar",
                input {
                    class: "users-search",
                    r#type: "search",
                    placeholder: "Search by name or email",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                button {
                    class: "users-new",
                    onclick: move |_| show_create.set(true),
                    "New user"
                }
            }

            if let Some(err) = load_error() {
                div { class: "form-error", "{err}" }
            }

            table {
                class: "users-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th {}
                    }
                }
                tbody {
                    for user in filtered {
                        UserRow {
                            key: "{user.id}",
                            user,
                            on_deleted: move |id: String| {
                                users.write().retain(|u| u.id != id);
                            },
                        }
                    }
                }
            }

            if show_create() {
                CreateUserDialog {
                    on_close: move |_| show_create.set(false),
                    on_created: move |user: UserInfo| {
                        users.write().push(user);
                        show_create.set(false);
                    },
                }
            }
        }
    }
}

#[component]
fn UserRow(user: UserInfo, on_deleted: EventHandler<String>) -> Element {
    let id = user.id.clone();

    rsx! {
        tr {
            td { "{user.name}" }
            td { "{user.email}" }
            td {
                span { class: "role-badge role-{user.role}", "{user.role}" }
            }
            td {
                button {
                    class: "users-delete",
                    title: "Delete account",
                    onclick: move |_| {
                        let id = id.clone();
                        async move {
                            match api::delete_user(id.clone()).await {
                                Ok(()) => on_deleted.call(id),
                                Err(err) => {
                                    tracing::error!("failed to delete user {id}: {err}");
                                }
                            }
                        }
                    },
                    Icon { icon: FaTrash, width: 13, height: 13 }
                }
            }
        }
    }
}

#[component]
fn CreateUserDialog(on_close: EventHandler<()>, on_created: EventHandler<UserInfo>) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut role = use_signal(|| "freelancer".to_string());
    let password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }

            saving.set(true);
            match api::create_user(e, n, role(), p).await {
                Ok(user) => {
                    on_created.call(user);
                }
                Err(err) => {
                    saving.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "dialog",
                onclick: move |evt| evt.stop_propagation(),

                h3 { "New user" }

                form {
                    onsubmit: handle_create,
                    class: "dialog-form",

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    input {
                        r#type: "text",
                        placeholder: "Name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }

                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    select {
                        value: role(),
                        onchange: move |evt: FormEvent| role.set(evt.value()),
                        option { value: "client", "Client" }
                        option { value: "freelancer", "Freelancer" }
                        option { value: "supervisor", "Supervisor" }
                    }

                    GeneratedPasswordInput { value: password }

                    div {
                        class: "dialog-actions",
                        button {
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "primary",
                            disabled: saving(),
                            if saving() { "Creating..." } else { "Create" }
                        }
                    }
                }
            }
        }
    }
}
