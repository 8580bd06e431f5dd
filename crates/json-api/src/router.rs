//! App Router

use salvo::Router;

use crate::{carts, orders, owners, purchases};

/// Routes that act on behalf of an owner.
pub(crate) fn owner_router() -> Router {
    Router::new()
        .hoop(owners::middleware::handler)
        .push(
            Router::with_path("carts")
                .get(carts::index::handler)
                .post(carts::create::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .delete(carts::delete::handler)
                        .push(
                            Router::with_path("items")
                                .post(carts::items::create::handler)
                                .delete(carts::items::clear::handler)
                                .push(
                                    Router::with_path("{item}")
                                        .put(carts::items::update::handler)
                                        .delete(carts::items::delete::handler),
                                ),
                        )
                        .push(Router::with_path("purchase").post(purchases::create::handler)),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .push(Router::with_path("{order}").get(orders::get::handler)),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;
    use uuid::Uuid;

    use reelcart_app::domain::owners::OwnerUuid;

    use crate::{owners::OWNER_HEADER, state::State, test_helpers::Mocks};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(mocks.into_app_context())))
                .push(owner_router()),
        )
    }

    #[tokio::test]
    async fn test_requests_without_owner_are_rejected() -> TestResult {
        let res = TestClient::get("http://example.com/carts")
            .send(&make_service(Mocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_owner_header_scopes_service_calls() -> TestResult {
        let owner = OwnerUuid::from_uuid(Uuid::now_v7());
        let mut mocks = Mocks::default();

        mocks
            .orders
            .expect_list_orders()
            .once()
            .withf(move |o| *o == owner)
            .return_once(|_| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/orders")
            .add_header(OWNER_HEADER, owner.to_string(), true)
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, r#"{"orders":[]}"#);

        Ok(())
    }
}
