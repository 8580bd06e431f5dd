//! Owner Models

use crate::uuids::TypedUuid;

/// Owner marker
#[derive(Debug)]
pub struct Owner;

/// Owner UUID
pub type OwnerUuid = TypedUuid<Owner>;
