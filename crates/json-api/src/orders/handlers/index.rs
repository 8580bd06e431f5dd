//! Order Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// The owner's orders, newest first
    pub orders: Vec<OrderResponse>,
}

/// Order Index Handler
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("owner_uuid" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let owner = depot.owner_uuid_or_401()?;

    let orders = app
        .orders
        .list_orders(owner)
        .await
        .map_err(into_status_error)?;

    let orders = orders
        .into_iter()
        .map(OrderResponse::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(into_status_error)?;

    Ok(Json(OrdersResponse { orders }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use reelcart_app::domain::{
        carts::models::CartUuid,
        orders::{OrdersServiceError, models::OrderUuid},
    };

    use crate::test_helpers::{Mocks, TEST_OWNER_UUID, make_order};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks.into_service(Router::with_path("orders").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_orders() -> TestResult {
        let newest = OrderUuid::new();
        let oldest = OrderUuid::new();
        let cart = CartUuid::new();

        let mut mocks = Mocks::default();

        mocks
            .orders
            .expect_list_orders()
            .once()
            .withf(|owner| *owner == TEST_OWNER_UUID)
            .return_once(move |_| {
                Ok(vec![
                    make_order(newest, cart, &[(1, 10)]),
                    make_order(oldest, cart, &[(3, 5)]),
                ])
            });

        let response: OrdersResponse = TestClient::get("http://example.com/orders")
            .send(&make_service(mocks))
            .await
            .take_json()
            .await?;

        let uuids: Vec<_> = response.orders.iter().map(|order| order.uuid).collect();

        assert_eq!(uuids, vec![newest.into_uuid(), oldest.into_uuid()]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .orders
            .expect_list_orders()
            .once()
            .return_once(|_| Err(OrdersServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/orders")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
