//! HTTP handlers, grouped by concern.

pub mod approvals;
pub mod catalog;
pub mod meetings;
pub mod reviews;
pub mod sync;
