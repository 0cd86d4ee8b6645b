//! Document status derivation and compliance rollups
//!
//! Status is a pure function of days-to-expiry rather than a stored field.
//! The upcoming window defaults to 40 days and can be widened through
//! configuration.

use serde::{Deserialize, Serialize};

use crate::core::types::{Document, DocumentStatus};

/// Days before expiry during which a document counts as Upcoming
pub const UPCOMING_WINDOW_DAYS: i64 = 40;

/// Days before expiry at which the display flips to a warning band
pub const WARNING_BAND_DAYS: i64 = 30;

/// Derive document status using the default upcoming window
pub fn derive_status(days_to_expiry: i64) -> DocumentStatus {
    derive_status_with_window(days_to_expiry, UPCOMING_WINDOW_DAYS)
}

/// Derive document status: negative days mean expired, anything inside the
/// window is upcoming, the rest is valid
pub fn derive_status_with_window(days_to_expiry: i64, window: i64) -> DocumentStatus {
    if days_to_expiry < 0 {
        DocumentStatus::Expired
    } else if days_to_expiry <= window {
        DocumentStatus::Upcoming
    } else {
        DocumentStatus::Valid
    }
}

/// Urgency band for rendering days-to-expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryUrgency {
    Overdue,
    Warning,
    Clear,
}

/// Band the remaining days for display
pub fn expiry_urgency(days_to_expiry: i64) -> ExpiryUrgency {
    if days_to_expiry < 0 {
        ExpiryUrgency::Overdue
    } else if days_to_expiry < WARNING_BAND_DAYS {
        ExpiryUrgency::Warning
    } else {
        ExpiryUrgency::Clear
    }
}

/// Counts by derived status across a document set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub total: usize,
    pub valid: usize,
    pub expired: usize,
    pub upcoming: usize,
}

/// Roll up document statuses for the compliance dashboard
pub fn summarize(documents: &[Document]) -> ComplianceSummary {
    documents.iter().fold(
        ComplianceSummary {
            total: documents.len(),
            ..Default::default()
        },
        |mut summary, doc| {
            match derive_status(doc.days_to_expiry) {
                DocumentStatus::Valid => summary.valid += 1,
                DocumentStatus::Expired => summary.expired += 1,
                DocumentStatus::Upcoming => summary.upcoming += 1,
            }
            summary
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_days_expired() {
        assert_eq!(derive_status(-41), DocumentStatus::Expired);
        assert_eq!(derive_status(-1), DocumentStatus::Expired);
    }

    #[test]
    fn test_window_boundaries() {
        assert_eq!(derive_status(0), DocumentStatus::Upcoming);
        assert_eq!(derive_status(40), DocumentStatus::Upcoming);
        assert_eq!(derive_status(41), DocumentStatus::Valid);
        assert_eq!(derive_status(198), DocumentStatus::Valid);
    }

    #[test]
    fn test_custom_window() {
        assert_eq!(derive_status_with_window(55, 60), DocumentStatus::Upcoming);
        assert_eq!(derive_status_with_window(61, 60), DocumentStatus::Valid);
    }

    #[test]
    fn test_urgency_bands() {
        assert_eq!(expiry_urgency(-5), ExpiryUrgency::Overdue);
        assert_eq!(expiry_urgency(0), ExpiryUrgency::Warning);
        assert_eq!(expiry_urgency(29), ExpiryUrgency::Warning);
        assert_eq!(expiry_urgency(30), ExpiryUrgency::Clear);
    }
}
