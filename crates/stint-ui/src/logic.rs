//! Pure helpers extracted from components for non-wasm testing.

use crate::state::{ApplicationId, ContactId};

/// Milliseconds a flash message stays fully visible before fading.
pub const FLASH_VISIBLE_MS: u32 = 5_000;
/// Milliseconds the fade-out transition runs before the flash is removed.
pub const FLASH_FADE_MS: u32 = 300;

/// Path serving dashboard statistics.
pub const STATS_PATH: &str = "/api/stats";
/// Target of the topbar search form.
pub const SEARCH_ACTION: &str = "/applications";

/// Status-update endpoint for an application record.
#[must_use]
pub fn status_update_path(id: ApplicationId) -> String {
    format!("/application/{id}/status")
}

/// Contacted-flag toggle endpoint for a contact record.
#[must_use]
pub fn contact_toggle_path(id: ContactId) -> String {
    format!("/contact/{id}/toggle")
}

/// Delete endpoint an application's delete form posts to.
#[must_use]
pub fn application_delete_path(id: ApplicationId) -> String {
    format!("/application/{id}/delete")
}

/// Delete endpoint a contact's delete form posts to.
#[must_use]
pub fn contact_delete_path(id: ContactId) -> String {
    format!("/contact/{id}/delete")
}

/// Whether a key press inside the search box submits the surrounding form.
#[must_use]
pub fn submits_search(key: &str) -> bool {
    key == "Enter"
}

/// Percent label for the response-rate card. The backend already rounds to
/// one decimal; the label keeps that precision.
#[must_use]
pub fn response_rate_label(rate: f64) -> String {
    format!("{rate:.1}%")
}

#[cfg(test)]
mod tests {
    use super::{
        FLASH_FADE_MS, FLASH_VISIBLE_MS, application_delete_path, contact_delete_path,
        contact_toggle_path, response_rate_label, status_update_path, submits_search,
    };

    #[test]
    fn endpoint_paths_embed_record_ids() {
        assert_eq!(status_update_path(42), "/application/42/status");
        assert_eq!(contact_toggle_path(7), "/contact/7/toggle");
        assert_eq!(application_delete_path(3), "/application/3/delete");
        assert_eq!(contact_delete_path(11), "/contact/11/delete");
    }

    #[test]
    fn only_enter_submits_the_search_form() {
        assert!(submits_search("Enter"));
        assert!(!submits_search("Tab"));
        assert!(!submits_search("e"));
        assert!(!submits_search(" "));
    }

    #[test]
    fn flash_lifetime_is_five_seconds_plus_fade() {
        assert_eq!(FLASH_VISIBLE_MS, 5_000);
        assert_eq!(FLASH_FADE_MS, 300);
    }

    #[test]
    fn response_rate_keeps_one_decimal() {
        assert_eq!(response_rate_label(33.3), "33.3%");
        assert_eq!(response_rate_label(0.0), "0.0%");
        assert_eq!(response_rate_label(100.0), "100.0%");
    }
}
