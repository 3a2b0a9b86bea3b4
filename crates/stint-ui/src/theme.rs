//! Theme catalog and stylesheet conventions for the Stint web UI.
//!
//! # Design
//! - A theme is addressed purely by identifier; the stylesheet path is derived
//!   by convention and never checked for existence.
//! - Unknown identifiers still apply (the stylesheet reference is written
//!   regardless); they simply leave no picker control marked active.

/// A selectable stylesheet theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeOption {
    /// Stable identifier; doubles as the stylesheet file stem.
    pub id: &'static str,
    /// Human-readable label for the picker control.
    pub label: &'static str,
}

/// Theme applied when nothing is persisted.
pub const DEFAULT_THEME: &str = "style-default";

/// Element id of the swappable stylesheet `<link>` in the page template.
pub const THEME_STYLESHEET_ID: &str = "theme-stylesheet";

/// Themes offered by the picker, in display order.
pub const THEMES: [ThemeOption; 4] = [
    ThemeOption {
        id: "style-default",
        label: "Default",
    },
    ThemeOption {
        id: "style-dark",
        label: "Dark",
    },
    ThemeOption {
        id: "style-ocean",
        label: "Ocean",
    },
    ThemeOption {
        id: "style-forest",
        label: "Forest",
    },
];

/// Stylesheet path for a theme identifier.
#[must_use]
pub fn stylesheet_href(id: &str) -> String {
    format!("/static/css/{id}.css")
}

/// Whether `id` names a catalog theme.
#[must_use]
pub fn is_catalog_theme(id: &str) -> bool {
    THEMES.iter().any(|theme| theme.id == id)
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_THEME, THEMES, is_catalog_theme, stylesheet_href};

    #[test]
    fn catalog_contains_the_default() {
        assert!(is_catalog_theme(DEFAULT_THEME));
    }

    #[test]
    fn hrefs_follow_the_static_css_convention() {
        assert_eq!(stylesheet_href("style-dark"), "/static/css/style-dark.css");
        for theme in THEMES {
            assert_eq!(
                stylesheet_href(theme.id),
                format!("/static/css/{}.css", theme.id)
            );
        }
    }

    #[test]
    fn unknown_identifiers_still_derive_a_path() {
        assert!(!is_catalog_theme("style-neon"));
        assert_eq!(stylesheet_href("style-neon"), "/static/css/style-neon.css");
    }

    #[test]
    fn catalog_ids_and_labels_are_distinct() {
        for (index, theme) in THEMES.iter().enumerate() {
            assert!(!theme.label.is_empty());
            for other in &THEMES[index + 1..] {
                assert_ne!(theme.id, other.id);
                assert_ne!(theme.label, other.label);
            }
        }
    }
}
