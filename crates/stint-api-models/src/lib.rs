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
//! Shared HTTP DTOs for the Stint tracker API.
//!
//! These types are re-used by the web client for request/response encoding so
//! the JSON contract with the tracker backend stays in a single place. The
//! backend acknowledges mutations with a bare `success` flag rather than HTTP
//! status alone, so the acknowledgement types keep that flag explicit instead
//! of hiding it behind transport errors.

use serde::{Deserialize, Serialize};

/// Workflow states an application record can occupy.
///
/// The status-update endpoint accepts a free-form string and validates it
/// server-side; this enum is the client's menu vocabulary, mirroring the set
/// the backend accepts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Bookmarked but not yet applied to.
    Saved,
    /// Application submitted.
    Applied,
    /// In the interview pipeline.
    Interviewing,
    /// Offer received.
    Offer,
    /// Rejected by the company.
    Rejected,
    /// Withdrawn by the candidate.
    Withdrawn,
}

impl ApplicationStatus {
    /// All statuses in menu display order.
    pub const ALL: [Self; 6] = [
        Self::Saved,
        Self::Applied,
        Self::Interviewing,
        Self::Offer,
        Self::Rejected,
        Self::Withdrawn,
    ];

    /// Wire identifier, as sent to and stored by the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Saved => "saved",
            Self::Applied => "applied",
            Self::Interviewing => "interviewing",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        }
    }

    /// Human-readable label for menu items and badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Saved => "Saved",
            Self::Applied => "Applied",
            Self::Interviewing => "Interviewing",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
            Self::Withdrawn => "Withdrawn",
        }
    }

    /// Parse a wire identifier; `None` for anything outside the vocabulary.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

/// Body for `POST /application/{id}/status`.
///
/// The status travels as a plain string: the backend owns validation and the
/// client must forward whatever identifier its control carried.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdateRequest {
    /// Requested workflow state.
    pub status: String,
}

/// Acknowledgement returned by the status-update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdateAck {
    /// Whether the mutation was applied.
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    /// Echo of the stored status on success.
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    /// Diagnostic detail on rejection (e.g., unknown status).
    pub error: Option<String>,
}

/// Acknowledgement returned by the contact-toggle endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactToggleAck {
    /// Whether the toggle was applied.
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    /// New contacted flag on success.
    pub contacted: Option<bool>,
}

/// Dashboard statistics returned by `GET /api/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsSnapshot {
    /// Total application count.
    pub total: u32,
    /// Applications still in the saved state.
    pub saved: u32,
    /// Applications submitted.
    pub applied: u32,
    /// Applications in the interview pipeline.
    pub interviewing: u32,
    /// Offers received.
    pub offers: u32,
    /// Rejections received.
    pub rejected: u32,
    /// Interviews-plus-offers over everything submitted, as a percentage
    /// already rounded to one decimal by the backend.
    pub response_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::{ApplicationStatus, ContactToggleAck, StatsSnapshot, StatusUpdateAck, StatusUpdateRequest};

    #[test]
    fn status_vocabulary_round_trips() {
        for status in ApplicationStatus::ALL {
            assert_eq!(ApplicationStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ApplicationStatus::parse("Interviewing"), None);
        assert_eq!(ApplicationStatus::parse("archived"), None);
    }

    #[test]
    fn status_request_body_is_a_bare_status_field() {
        let body = serde_json::to_string(&StatusUpdateRequest {
            status: "interviewing".to_string(),
        })
        .expect("serialize request");
        assert_eq!(body, r#"{"status":"interviewing"}"#);
    }

    #[test]
    fn success_ack_echoes_status() {
        let ack: StatusUpdateAck =
            serde_json::from_str(r#"{"success": true, "status": "applied"}"#).expect("decode ack");
        assert!(ack.success);
        assert_eq!(ack.status.as_deref(), Some("applied"));
        assert!(ack.error.is_none());
    }

    #[test]
    fn rejection_ack_carries_error_detail() {
        let ack: StatusUpdateAck =
            serde_json::from_str(r#"{"success": false, "error": "Invalid status"}"#)
                .expect("decode ack");
        assert!(!ack.success);
        assert_eq!(ack.error.as_deref(), Some("Invalid status"));
    }

    #[test]
    fn contact_ack_reports_new_flag() {
        let ack: ContactToggleAck =
            serde_json::from_str(r#"{"success": true, "contacted": false}"#).expect("decode ack");
        assert!(ack.success);
        assert_eq!(ack.contacted, Some(false));
    }

    #[test]
    fn stats_decode_matches_backend_shape() {
        let stats: StatsSnapshot = serde_json::from_str(
            r#"{"total": 12, "saved": 3, "applied": 4, "interviewing": 2,
                "offers": 1, "rejected": 2, "response_rate": 33.3}"#,
        )
        .expect("decode stats");
        assert_eq!(stats.total, 12);
        assert!((stats.response_rate - 33.3).abs() < f64::EPSILON);
    }
}
