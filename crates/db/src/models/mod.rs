//! Database row models and DTOs.

pub mod approval;
pub mod catalog;
pub mod review;
