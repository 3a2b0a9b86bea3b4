//! View models and demo data for the page shell.
//!
//! Demo rows stand in when the tracker backend is unreachable so the shell
//! stays usable offline; live pages replace them wholesale on reload.

use crate::state::{ApplicationRow, ContactRow};
use stint_api_models::StatsSnapshot;

/// Flash severities rendered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    /// Confirmation of a completed action.
    Success,
    /// Neutral notice.
    Info,
    /// Something went wrong.
    Error,
}

impl FlashKind {
    /// CSS class suffix understood by the theme stylesheets.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// A transient notification banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    /// Monotonic identifier assigned by the shell.
    pub id: u64,
    /// Severity classification.
    pub kind: FlashKind,
    /// Display message.
    pub message: String,
}

/// Demo applications shown when no live data is available.
#[must_use]
pub fn demo_applications() -> Vec<ApplicationRow> {
    vec![
        ApplicationRow {
            id: 1,
            company: "Cloudscale Systems".to_string(),
            job_title: "Backend Engineering Intern".to_string(),
            location: "Berlin".to_string(),
            status: "interviewing".to_string(),
            deadline: Some("2026-09-30".to_string()),
            tags: vec!["rust".to_string(), "backend".to_string()],
        },
        ApplicationRow {
            id: 2,
            company: "Nimbus Analytics".to_string(),
            job_title: "Data Platform Intern".to_string(),
            location: "Remote".to_string(),
            status: "applied".to_string(),
            deadline: Some("2026-10-15".to_string()),
            tags: vec!["data".to_string()],
        },
        ApplicationRow {
            id: 3,
            company: "Helios Robotics".to_string(),
            job_title: "Embedded Software Intern".to_string(),
            location: "Munich".to_string(),
            status: "saved".to_string(),
            deadline: None,
            tags: vec!["embedded".to_string(), "c++".to_string()],
        },
        ApplicationRow {
            id: 4,
            company: "Forge Security".to_string(),
            job_title: "Security Engineering Intern".to_string(),
            location: "Amsterdam".to_string(),
            status: "offer".to_string(),
            deadline: None,
            tags: vec!["security".to_string()],
        },
        ApplicationRow {
            id: 5,
            company: "Brightline Health".to_string(),
            job_title: "Full-Stack Intern".to_string(),
            location: "Stockholm".to_string(),
            status: "rejected".to_string(),
            deadline: None,
            tags: vec![],
        },
    ]
}

/// Demo contacts shown when no live data is available.
#[must_use]
pub fn demo_contacts() -> Vec<ContactRow> {
    vec![
        ContactRow {
            id: 1,
            name: "Maya Lindqvist".to_string(),
            title: "Engineering Manager".to_string(),
            email: "maya.lindqvist@cloudscale.example".to_string(),
            contacted: true,
        },
        ContactRow {
            id: 2,
            name: "Jonas Weber".to_string(),
            title: "University Recruiter".to_string(),
            email: "jweber@helios.example".to_string(),
            contacted: false,
        },
        ContactRow {
            id: 3,
            name: "Priya Raman".to_string(),
            title: "Staff Engineer".to_string(),
            email: String::new(),
            contacted: false,
        },
    ]
}

/// Demo statistics consistent with [`demo_applications`]' distribution.
#[must_use]
pub fn demo_stats() -> StatsSnapshot {
    StatsSnapshot {
        total: 12,
        saved: 3,
        applied: 4,
        interviewing: 2,
        offers: 1,
        rejected: 2,
        response_rate: 33.3,
    }
}

#[cfg(test)]
mod tests {
    use super::{FlashKind, demo_applications, demo_contacts, demo_stats};

    #[test]
    fn demo_statuses_stay_within_the_vocabulary() {
        for row in demo_applications() {
            assert!(row.status_kind().is_some(), "unknown status: {}", row.status);
        }
    }

    #[test]
    fn demo_stats_are_internally_consistent() {
        let stats = demo_stats();
        let submitted = stats.applied + stats.interviewing + stats.offers + stats.rejected;
        assert!(stats.saved + submitted <= stats.total);
        let expected = f64::from(stats.interviewing + stats.offers) / f64::from(submitted) * 100.0;
        assert!((stats.response_rate - (expected * 10.0).round() / 10.0).abs() < 1e-9);
    }

    #[test]
    fn demo_rows_have_unique_ids() {
        let apps = demo_applications();
        let contacts = demo_contacts();
        for (index, row) in apps.iter().enumerate() {
            assert!(apps[index + 1..].iter().all(|other| other.id != row.id));
        }
        for (index, row) in contacts.iter().enumerate() {
            assert!(contacts[index + 1..].iter().all(|other| other.id != row.id));
        }
    }

    #[test]
    fn flash_kinds_map_to_css_suffixes() {
        assert_eq!(FlashKind::Success.as_class(), "success");
        assert_eq!(FlashKind::Info.as_class(), "info");
        assert_eq!(FlashKind::Error.as_class(), "error");
    }
}
