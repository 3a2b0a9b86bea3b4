//! Persistence helpers for the app shell.

use crate::theme::DEFAULT_THEME;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;

pub(crate) const THEME_KEY: &str = "theme";

/// Persisted theme identifier, or the default when nothing is stored or the
/// store is unreadable.
pub(crate) fn load_theme() -> String {
    LocalStorage::get::<String>(THEME_KEY).unwrap_or_else(|_| DEFAULT_THEME.to_string())
}

/// Persist the selected theme. Called from the picker callback only; the
/// restore path never re-persists.
pub(crate) fn persist_theme(id: &str) {
    set_storage(THEME_KEY, id);
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        console::error!("storage operation failed", key, err.to_string());
    }
}
