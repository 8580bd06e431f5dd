//! Owner depot extensions.

use salvo::prelude::{Depot, StatusError};

use reelcart_app::domain::owners::OwnerUuid;

const OWNER_UUID_DEPOT_KEY: &str = "owner_uuid";

/// Carries the resolved owner from the owner middleware to handlers.
pub(crate) trait OwnerExt {
    fn insert_owner_uuid(&mut self, owner: OwnerUuid);

    fn owner_uuid_or_401(&self) -> Result<OwnerUuid, StatusError>;
}

impl OwnerExt for Depot {
    fn insert_owner_uuid(&mut self, owner: OwnerUuid) {
        self.insert(OWNER_UUID_DEPOT_KEY, owner);
    }

    fn owner_uuid_or_401(&self) -> Result<OwnerUuid, StatusError> {
        self.get::<OwnerUuid>(OWNER_UUID_DEPOT_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized().brief("Missing owner"))
    }
}
