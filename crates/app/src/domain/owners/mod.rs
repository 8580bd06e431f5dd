//! Owners
//!
//! Owners are managed by the identity collaborator; this crate only scopes
//! carts and orders by their uuid.

pub mod models;

pub use models::OwnerUuid;
