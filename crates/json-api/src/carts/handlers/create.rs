//! Create Cart Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use reelcart_app::domain::carts::models::{CartUuid, NewCart};

use crate::{
    carts::{errors::into_status_error, get::CartResponse},
    extensions::*,
};

/// Create Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartRequest {
    /// Client-chosen identifier; generated when omitted
    pub uuid: Option<Uuid>,

    /// Cart name; surrounding whitespace is trimmed
    pub name: String,
}

impl From<CreateCartRequest> for NewCart {
    fn from(request: CreateCartRequest) -> Self {
        NewCart {
            uuid: request.uuid.map_or_else(CartUuid::new, CartUuid::from_uuid),
            name: request.name,
        }
    }
}

/// Create Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    security(("owner_uuid" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::CONFLICT, description = "Duplicate name or cart limit reached"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Blank or overlong name"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let owner = depot.owner_uuid_or_401()?;

    let cart = app
        .carts
        .create_cart(owner, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/carts/{}", cart.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    CartResponse::try_from(cart)
        .map(Json)
        .map_err(into_status_error)
}
