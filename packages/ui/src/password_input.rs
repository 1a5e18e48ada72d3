//! Password input with generate and copy actions, used when a supervisor
//! provisions a new account.

use client::generate_password;
use dioxus::prelude::*;

use crate::icons::{FaArrowsRotate, FaCopy};
use crate::Icon;

/// Text input bound to `value` with "generate" and "copy" buttons.
///
/// Generate replaces the field content with a fresh random password; copy
/// puts the current value on the clipboard so the supervisor can hand it to
/// the new user. The value lives in the caller's signal and is discarded
/// with the dialog that owns it.
#[component]
pub fn GeneratedPasswordInput(value: Signal<String>) -> Element {
    let mut value = value;

    rsx! {
        div {
            class: "password-input-row",
            input {
                class: "password-input",
                r#type: "text",
                placeholder: "Password",
                value: value(),
                oninput: move |evt: FormEvent| value.set(evt.value()),
            }
            button {
                r#type: "button",
                class: "password-action",
                title: "Generate password",
                onclick: move |_| value.set(generate_password()),
                Icon { icon: FaArrowsRotate, width: 14, height: 14 }
            }
            button {
                r#type: "button",
                class: "password-action",
                title: "Copy to clipboard",
                onclick: move |_| copy_to_clipboard(&value()),
                Icon { icon: FaCopy, width: 14, height: 14 }
            }
        }
    }
}

fn copy_to_clipboard(text: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            // Fire and forget; the promise resolves after the write lands
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = text;
    }
}
