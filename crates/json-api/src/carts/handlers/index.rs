//! Cart Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    carts::{errors::into_status_error, get::CartResponse},
    extensions::*,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartsResponse {
    /// The owner's carts, oldest first
    pub carts: Vec<CartResponse>,
}

/// Cart Index Handler
///
/// Returns every cart of the calling owner.
#[endpoint(
    tags("carts"),
    summary = "List Carts",
    security(("owner_uuid" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartsResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let owner = depot.owner_uuid_or_401()?;

    let carts = app
        .carts
        .list_carts(owner)
        .await
        .map_err(into_status_error)?;

    let carts = carts
        .into_iter()
        .map(CartResponse::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(into_status_error)?;

    Ok(Json(CartsResponse { carts }))
}
