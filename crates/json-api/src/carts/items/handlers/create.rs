//! Create Cart Item Handler

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use reelcart_app::domain::{
    carts::models::{CartItemUuid, NewCartItem},
    movies::models::MovieUuid,
};

use crate::{
    carts::{errors::into_status_error, get::CartItemResponse},
    extensions::*,
};

/// Create Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartItemRequest {
    /// Identifier for the line if it is new; generated when omitted
    pub uuid: Option<Uuid>,

    pub movie_uuid: Uuid,

    /// Copies to add; must be at least one
    pub quantity: u32,
}

impl From<CreateCartItemRequest> for NewCartItem {
    fn from(request: CreateCartItemRequest) -> Self {
        NewCartItem {
            uuid: request
                .uuid
                .map_or_else(CartItemUuid::new, CartItemUuid::from_uuid),
            movie_uuid: MovieUuid::from_uuid(request.movie_uuid),
            quantity: request.quantity,
        }
    }
}

/// Create Cart Item Handler
///
/// Adding a movie the cart already holds raises that line's quantity and
/// keeps its quoted price.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    security(("owner_uuid" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cart line created or merged"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or movie not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid quantity"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<CreateCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let owner = depot.owner_uuid_or_401()?;

    let cart = cart.into_inner();

    let item = app
        .items
        .add_item(owner, cart.into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/carts/{cart}/items/{}", item.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    CartItemResponse::try_from(item)
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
        mocks.into_service(Router::with_path("carts/{cart}/items").post(handler))
    }

    #[tokio::test]
    async fn test_add_item_success() -> TestResult {
        let cart = CartUuid::new();
        let movie = MovieUuid::new();
        let mut item = make_item(cart, 2, 10);

        item.movie_uuid = movie;

        let item_uuid = item.uuid;

        let mut mocks = Mocks::default();

        mocks
            .items
            .expect_add_item()
            .once()
            .withf(move |owner, c, new| {
                *owner == TEST_OWNER_UUID
                    && *c == cart
                    && new.movie_uuid == movie
                    && new.quantity == 2
            })
            .return_once(move |_, _, _| Ok(item));

        let mut res = TestClient::post(format!("http://example.com/carts/{cart}/items"))
            .json(&json!({ "movie_uuid": movie.into_uuid(), "quantity": 2 }))
            .send(&make_service(mocks))
            .await;

        let location = res
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);

        let body: CartItemResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/carts/{cart}/items/{item_uuid}")));
        assert_eq!(body.price, 10);
        assert_eq!(body.subtotal, 20);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_zero_quantity_returns_422() -> TestResult {
        let cart = CartUuid::new();
        let mut mocks = Mocks::default();

        mocks
            .items
            .expect_add_item()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::InvalidQuantity));

        let res = TestClient::post(format!("http://example.com/carts/{cart}/items"))
            .json(&json!({ "movie_uuid": Uuid::now_v7(), "quantity": 0 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_negative_quantity_is_rejected_before_service() -> TestResult {
        let cart = CartUuid::new();

        let res = TestClient::post(format!("http://example.com/carts/{cart}/items"))
            .json(&json!({ "movie_uuid": Uuid::now_v7(), "quantity": -1 }))
            .send(&make_service(Mocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_unknown_movie_returns_404() -> TestResult {
        let cart = CartUuid::new();
        let mut mocks = Mocks::default();

        mocks
            .items
            .expect_add_item()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::NotFound));

        let res = TestClient::post(format!("http://example.com/carts/{cart}/items"))
            .json(&json!({ "movie_uuid": Uuid::now_v7(), "quantity": 1 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
