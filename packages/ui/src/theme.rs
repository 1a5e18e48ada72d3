//! Theme (dark-mode) context and persistence.
//!
//! The choice is `None` for "follow the OS" or `Some("light")`/
//! `Some("dark")` to force one. It is applied as a `data-theme` attribute
//! on the document root and persisted to localStorage.

use dioxus::prelude::*;

pub type ThemeSignal = Signal<Option<String>>;

const THEME_STORAGE_KEY: &str = "cleanix.theme";

/// Apply a theme choice to the document and persist it.
pub fn apply_theme(choice: Option<&str>) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            match choice {
                Some(theme) => {
                    let _ = root.set_attribute("data-theme", theme);
                }
                None => {
                    let _ = root.remove_attribute("data-theme");
                }
            }
        }
        match choice {
            Some(theme) => crate::storage::set(THEME_STORAGE_KEY, theme),
            None => crate::storage::remove(THEME_STORAGE_KEY),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = choice;
    }
}

/// Restore the persisted theme choice into the context signal.
pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    if let Some(saved) = crate::storage::get(THEME_STORAGE_KEY) {
        apply_theme(Some(&saved));
        theme.set(Some(saved));
    }
}
