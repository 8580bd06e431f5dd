//! Carts

pub mod errors;
pub mod items;
pub mod models;
pub(crate) mod repositories;
pub mod service;

pub use errors::CartsServiceError;
pub use items::{CartItemsService, MockCartItemsService, PgCartItemsService};
pub use service::*;
