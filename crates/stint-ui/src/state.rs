//! Pure UI state machines and row models for testing outside wasm.

use stint_api_models::ApplicationStatus;

/// Server-assigned identifier of an application record.
pub type ApplicationId = u32;

/// Server-assigned identifier of a contact record.
pub type ContactId = u32;

/// Open/closed state for every status menu on the page.
///
/// # Design
/// - A single slot holds the open menu, so "at most one menu open" holds by
///   construction rather than by bookkeeping.
/// - Menus are keyed by the owning application id; locating a menu never
///   involves DOM traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: Option<ApplicationId>,
}

impl MenuState {
    /// Toggle the menu owned by `id`, closing any other open menu.
    pub fn toggle(&mut self, id: ApplicationId) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    /// Close whatever menu is open. Used by the document-level dismiss.
    pub fn dismiss(&mut self) {
        self.open = None;
    }

    /// Whether the menu owned by `id` is open.
    #[must_use]
    pub fn is_open(self, id: ApplicationId) -> bool {
        self.open == Some(id)
    }

    /// The currently open menu, if any.
    #[must_use]
    pub const fn open_menu(self) -> Option<ApplicationId> {
        self.open
    }
}

/// Row model for the applications table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationRow {
    /// Record identifier.
    pub id: ApplicationId,
    /// Company name.
    pub company: String,
    /// Advertised job title.
    pub job_title: String,
    /// Office location or "Remote".
    pub location: String,
    /// Current workflow status, as stored by the backend.
    pub status: String,
    /// Application deadline (ISO date), when the posting has one.
    pub deadline: Option<String>,
    /// Free-form labels applied by the user.
    pub tags: Vec<String>,
}

impl ApplicationRow {
    /// Status parsed against the shared vocabulary, when recognised.
    ///
    /// Unrecognised statuses still render; they simply get no badge styling
    /// and no menu item marked as current.
    #[must_use]
    pub fn status_kind(&self) -> Option<ApplicationStatus> {
        ApplicationStatus::parse(&self.status)
    }
}

/// Row model for an application's contact list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRow {
    /// Record identifier.
    pub id: ContactId,
    /// Contact name.
    pub name: String,
    /// Role at the company (may be empty).
    pub title: String,
    /// Email address (may be empty).
    pub email: String,
    /// Whether the contact has been reached out to.
    pub contacted: bool,
}

#[cfg(test)]
mod tests {
    use super::{ApplicationRow, MenuState};

    #[test]
    fn at_most_one_menu_is_open() {
        let mut menus = MenuState::default();
        for id in [1, 2, 3, 2, 7] {
            menus.toggle(id);
            assert!(menus.is_open(id));
            assert_eq!(menus.open_menu(), Some(id));
            for other in [1, 2, 3, 7] {
                if other != id {
                    assert!(!menus.is_open(other));
                }
            }
        }
    }

    #[test]
    fn toggling_the_open_menu_closes_it() {
        let mut menus = MenuState::default();
        menus.toggle(5);
        menus.toggle(5);
        assert_eq!(menus.open_menu(), None);
    }

    #[test]
    fn dismiss_closes_regardless_of_prior_state() {
        let mut menus = MenuState::default();
        menus.dismiss();
        assert_eq!(menus.open_menu(), None);
        menus.toggle(9);
        menus.dismiss();
        assert_eq!(menus.open_menu(), None);
    }

    #[test]
    fn status_kind_rejects_unknown_vocabulary() {
        let mut row = ApplicationRow {
            id: 1,
            company: "Cloudscale Systems".into(),
            job_title: "Backend Engineering Intern".into(),
            location: "Berlin".into(),
            status: "interviewing".into(),
            deadline: None,
            tags: vec![],
        };
        assert!(row.status_kind().is_some());
        row.status = "ghosted".into();
        assert!(row.status_kind().is_none());
    }
}
