//! Reelcart Domain Concerns

pub mod carts;
pub mod movies;
pub mod orders;
pub mod owners;
pub mod purchases;
