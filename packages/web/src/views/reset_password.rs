//! Password reset view: request a token, then redeem it.

use dioxus::prelude::*;

use crate::Route;

/// Two-step reset page. Requesting always reports success so the form does
/// not reveal which emails exist; the token arrives out of band.
#[component]
pub fn ResetPassword() -> Element {
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut requested = use_signal(|| false);
    let mut token = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_request = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }

            loading.set(true);
            match api::request_password_reset(e).await {
                Ok(()) => {
                    requested.set(true);
                    loading.set(false);
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let handle_reset = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let t = token().trim().to_string();
            let p = password();

            if t.is_empty() {
                error.set(Some("Reset token is required".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }

            loading.set(true);
            match api::reset_password(t, p).await {
                Ok(()) => {
                    nav.replace(Route::Login {});
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

            h1 { class: "auth-title", "Reset password" }

            if !requested() {
                p { class: "auth-subtitle", "We'll send a reset token to your email" }

                form {
                    onsubmit: handle_request,
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

                    button {
                        r#type: "submit",
                        class: "primary",
                        disabled: loading(),
                        if loading() { "Sending..." } else { "Send reset token" }
                    }
                }
            } else {
                p { class: "auth-subtitle", "Check your email, then paste the token below" }

                form {
                    onsubmit: handle_reset,
                    class: "auth-form",

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    input {
                        r#type: "text",
                        placeholder: "Reset token",
                        value: token(),
                        oninput: move |evt: FormEvent| token.set(evt.value()),
                    }

                    input {
                        r#type: "password",
                        placeholder: "New password (min 8 characters)",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    button {
                        r#type: "submit",
                        class: "primary",
                        disabled: loading(),
                        if loading() { "Resetting..." } else { "Reset password" }
                    }
                }
            }

            p {
                class: "auth-footer",
                "Remembered it after all? "
                Link { class: "auth-link", to: Route::Login {}, "Sign in" }
            }
        }
    }
}
