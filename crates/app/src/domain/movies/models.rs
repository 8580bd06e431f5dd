//! Movie Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Movie UUID
pub type MovieUuid = TypedUuid<Movie>;

/// Movie Model
#[derive(Debug, Clone)]
pub struct Movie {
    pub uuid: MovieUuid,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Movie Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub uuid: MovieUuid,
    pub name: String,
    pub description: String,
    pub price: u64,
}
