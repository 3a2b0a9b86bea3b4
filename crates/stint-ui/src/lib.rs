#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Stint web client.
//!
//! This crate holds the Yew front-end entrypoint plus the pure UI state
//! machines and wire-path helpers, which compile natively so their behavior is
//! covered by ordinary unit tests. Everything that touches the DOM, storage,
//! or the network is gated on wasm32.

pub mod logic;
pub mod models;
pub mod state;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::logic::status_update_path;
    use crate::state::MenuState;
    use crate::theme::{DEFAULT_THEME, is_catalog_theme, stylesheet_href};

    #[test]
    fn default_theme_is_offered_by_the_picker() {
        assert!(is_catalog_theme(DEFAULT_THEME));
        assert_eq!(stylesheet_href(DEFAULT_THEME), "/static/css/style-default.css");
    }

    #[test]
    fn menu_and_path_helpers_compose() {
        let mut menus = MenuState::default();
        menus.toggle(42);
        let target = menus.open_menu().map(status_update_path);
        assert_eq!(target.as_deref(), Some("/application/42/status"));
    }
}
