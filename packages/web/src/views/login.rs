//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

const REMEMBERED_EMAIL_KEY: &str = "cleanix.rememberedEmail";

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Prefill from the remembered-email flag
    use_effect(move || {
        if let Some(saved) = ui::storage::get(REMEMBERED_EMAIL_KEY) {
            email.set(saved);
            remember.set(true);
        }
    });

    // If already logged in, go to the dashboard
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            loading.set(true);
            match api::login(e.clone(), p).await {
                Ok(user) => {
                    if remember() {
                        ui::storage::set(REMEMBERED_EMAIL_KEY, &e);
                    } else {
                        ui::storage::remove(REMEMBERED_EMAIL_KEY);
                    }
                    let mut state = auth();
                    state.user = Some(user);
                    state.loading = false;
                    auth.set(state);
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Cleanix" }
            p { class: "auth-subtitle", "Sign in to your account" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                label {
                    class: "remember-me",
                    input {
                        r#type: "checkbox",
                        checked: remember(),
                        onchange: move |evt: FormEvent| remember.set(evt.checked()),
                    }
                    span { "Remember my email" }
                }

                button {
                    r#type: "submit",
                    class: "primary",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-footer",
                "No account yet? "
                Link { class: "auth-link", to: Route::Register {}, "Sign up" }
            }
            p {
                class: "auth-footer",
                "Forgot your password? "
                Link { class: "auth-link", to: Route::ResetPassword {}, "Reset it" }
            }
        }
    }
}
