//! App-wide yewdux store slices.
//!
//! # Design
//! - The dropdown controller is the only page-wide shared state; it lives in
//!   one slice so no component owns another's menu.

use crate::state::MenuState;
use yewdux::store::Store;

/// Global application store for shared UI state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Store)]
pub(crate) struct AppStore {
    /// Status-menu open/closed state, keyed by application id.
    pub menus: MenuState,
}
