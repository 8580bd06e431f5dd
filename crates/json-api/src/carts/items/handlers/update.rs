//! Update Cart Item Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use reelcart_app::domain::carts::{CartsServiceError, models::CartItemUpdate};

use crate::{
    carts::{errors::into_status_error, get::CartItemResponse},
    extensions::*,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New quantity; zero or less removes the line
    pub quantity: i64,
}

/// Update Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemResponse {
    /// Whether the line was removed
    pub removed: bool,

    /// The updated line, absent when removed
    pub item: Option<CartItemResponse>,
}

impl TryFrom<CartItemUpdate> for UpdateCartItemResponse {
    type Error = CartsServiceError;

    fn try_from(update: CartItemUpdate) -> Result<Self, Self::Error> {
        Ok(match update {
            CartItemUpdate::Updated(item) => Self {
                removed: false,
                item: Some(item.try_into()?),
            },
            CartItemUpdate::Removed => Self {
                removed: true,
                item: None,
            },
        })
    }
}

/// Update Cart Item Handler
#[endpoint(
    tags("carts"),
    summary = "Set Cart Item Quantity",
    security(("owner_uuid" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart line updated or removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or line not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid quantity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    item: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<UpdateCartItemResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let owner = depot.owner_uuid_or_401()?;

    let update = app
        .items
        .update_quantity(
            owner,
            cart.into_inner().into(),
            item.into_inner().into(),
            json.into_inner().quantity,
        )
        .await
        .map_err(into_status_error)?;

    UpdateCartItemResponse::try_from(update)
        .map(Json)
        .map_err(into_status_error)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use reelcart_app::domain::carts::{CartsServiceError, models::CartUuid};

    use crate::test_helpers::{Mocks, TEST_OWNER_UUID, make_item};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.into_service(Router::with_path("carts/{cart}/items/{item}").put(handler))
    }

    #[tokio::test]
    async fn test_update_quantity_returns_updated_line() -> TestResult {
        let cart = CartUuid::new();
        let item = make_item(cart, 5, 10);
        let item_uuid = item.uuid;

        let mut mocks = Mocks::default();

        mocks
            .items
            .expect_update_quantity()
            .once()
            .withf(move |owner, c, i, quantity| {
                *owner == TEST_OWNER_UUID && *c == cart && *i == item_uuid && *quantity == 5
            })
            .return_once(move |_, _, _, _| Ok(CartItemUpdate::Updated(item)));

        let response: UpdateCartItemResponse =
            TestClient::put(format!("http://example.com/carts/{cart}/items/{item_uuid}"))
                .json(&json!({ "quantity": 5 }))
                .send(&make_service(mocks))
                .await
                .take_json()
                .await?;

        assert!(!response.removed);
        assert_eq!(response.item.map(|item| item.quantity), Some(5));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_quantity_zero_reports_removal() -> TestResult {
        let cart = CartUuid::new();
        let item = Uuid::now_v7();

        let mut mocks = Mocks::default();

        mocks
            .items
            .expect_update_quantity()
            .once()
            .withf(|_, _, _, quantity| *quantity == 0)
            .return_once(|_, _, _, _| Ok(CartItemUpdate::Removed));

        let mut res = TestClient::put(format!("http://example.com/carts/{cart}/items/{item}"))
            .json(&json!({ "quantity": 0 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let response: UpdateCartItemResponse = res.take_json().await?;

        assert!(response.removed);
        assert!(response.item.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_line_returns_404() -> TestResult {
        let cart = CartUuid::new();
        let item = Uuid::now_v7();

        let mut mocks = Mocks::default();

        mocks
            .items
            .expect_update_quantity()
            .once()
            .return_once(|_, _, _, _| Err(CartsServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/carts/{cart}/items/{item}"))
            .json(&json!({ "quantity": 3 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
