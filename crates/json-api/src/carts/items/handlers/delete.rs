//! Delete Cart Item Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*};

/// Delete Cart Item Handler
#[endpoint(
    tags("carts"),
    summary = "Remove Cart Item",
    security(("owner_uuid" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or line not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let app = depot.app_or_500()?;
    let owner = depot.owner_uuid_or_401()?;

    app.items
        .remove_item(owner, cart.into_inner().into(), item.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use reelcart_app::domain::carts::{
        CartsServiceError,
        models::{CartItemUuid, CartUuid},
    };

    use crate::test_helpers::{Mocks, TEST_OWNER_UUID};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.into_service(Router::with_path("carts/{cart}/items/{item}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_item_success() -> TestResult {
        let cart = CartUuid::new();
        let item = CartItemUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .items
            .expect_remove_item()
            .once()
            .withf(move |owner, c, i| *owner == TEST_OWNER_UUID && *c == cart && *i == item)
            .return_once(|_, _, _| Ok(()));

        let res = TestClient::delete(format!("http://example.com/carts/{cart}/items/{item}"))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::delete("http://example.com/carts/not-a-uuid/items/also-not-a-uuid")
            .send(&make_service(Mocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item_not_found_returns_404() -> TestResult {
        let cart = CartUuid::new();
        let item = CartItemUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .items
            .expect_remove_item()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/carts/{cart}/items/{item}"))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
