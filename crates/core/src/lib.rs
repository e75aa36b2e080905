//! Domain logic for the meeting planner.
//!
//! This crate has zero internal dependencies so it can be used by both the
//! DB/repository layer and the API layer. It owns the static meeting rule
//! table, the date derivation algorithm, the meeting set builder, and the
//! approval aggregation policy.

pub mod approval;
pub mod builder;
pub mod derive;
pub mod error;
pub mod meeting;
pub mod program;
pub mod rules;
pub mod types;
