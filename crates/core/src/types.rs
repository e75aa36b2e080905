/// Database row identifier used across all crates.
pub type DbId = i64;

/// UTC timestamp used for created/expires columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
