//! Approval aggregation: folds director responses into per-meeting and
//! per-review status views.
//!
//! The policy is any-veto, not majority: a single decline flips a meeting
//! to rejected no matter how many approvals coexist.

use serde::Serialize;

use crate::error::CoreError;

/// Director response statuses accepted at the boundary.
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";
pub const STATUS_ACCEPTED: &str = "accepted";
pub const STATUS_DECLINED: &str = "declined";
pub const STATUS_PENDING: &str = "pending";

/// All valid director response statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_APPROVED,
    STATUS_REJECTED,
    STATUS_ACCEPTED,
    STATUS_DECLINED,
    STATUS_PENDING,
];

/// Validate that a director response status is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Whether a response counts as approving.
pub fn is_approving(status: &str) -> bool {
    matches!(status, STATUS_APPROVED | STATUS_ACCEPTED)
}

/// Whether a response counts as rejecting.
pub fn is_rejecting(status: &str) -> bool {
    matches!(status, STATUS_REJECTED | STATUS_DECLINED)
}

/// Derived status of one meeting across all director responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Pending,
    Approved,
    Rejected,
}

/// Fold a meeting's response statuses into an overall status plus the
/// approving-vote count. Any rejection wins over any number of approvals.
pub fn derive_status<'a>(statuses: impl IntoIterator<Item = &'a str>) -> (OverallStatus, i64) {
    let mut approved = 0;
    let mut rejected = 0;
    for status in statuses {
        if is_approving(status) {
            approved += 1;
        } else if is_rejecting(status) {
            rejected += 1;
        }
    }

    let overall = if rejected > 0 {
        OverallStatus::Rejected
    } else if approved > 0 {
        OverallStatus::Approved
    } else {
        OverallStatus::Pending
    };
    (overall, approved)
}

/// Review-level counts by status bucket.
///
/// `partially_approved` exists for interface compatibility with older
/// clients and is never populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub total_meetings: i64,
    pub approved: i64,
    pub partially_approved: i64,
    pub pending: i64,
    pub rejected: i64,
    pub ready_for_export: i64,
}

/// Bucket per-meeting overall statuses into a review summary. Approved
/// meetings also count toward `ready_for_export`.
pub fn summarize(statuses: impl IntoIterator<Item = OverallStatus>) -> ReviewSummary {
    let mut summary = ReviewSummary::default();
    for status in statuses {
        summary.total_meetings += 1;
        match status {
            OverallStatus::Rejected => summary.rejected += 1,
            OverallStatus::Approved => {
                summary.approved += 1;
                summary.ready_for_export += 1;
            }
            OverallStatus::Pending => summary.pending += 1,
        }
    }
    summary
}
