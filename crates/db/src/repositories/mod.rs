//! Repository layer: stateless structs with async functions over a pool.

pub mod approval_repo;
pub mod catalog_repo;
pub mod review_repo;

pub use approval_repo::ApprovalRepo;
pub use catalog_repo::CatalogRepo;
pub use review_repo::ReviewRepo;
