//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use reelcart_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartItemsService, MockCartsService,
            models::{Cart, CartItem, CartItemUuid, CartUuid},
        },
        movies::{MockCatalogService, models::MovieUuid},
        orders::{
            MockOrdersService,
            models::{Order, OrderLine, OrderLineUuid, OrderUuid},
        },
        owners::OwnerUuid,
        purchases::MockPurchasesService,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_OWNER_UUID: OwnerUuid = OwnerUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_owner(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_owner_uuid(TEST_OWNER_UUID);
    ctrl.call_next(req, depot, res).await;
}

/// Service mocks with no expectations; any call a test did not set up fails.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) carts: MockCartsService,
    pub(crate) items: MockCartItemsService,
    pub(crate) purchases: MockPurchasesService,
    pub(crate) orders: MockOrdersService,
}

impl Mocks {
    pub(crate) fn into_app_context(self) -> AppContext {
        AppContext {
            catalog: Arc::new(MockCatalogService::new()),
            carts: Arc::new(self.carts),
            items: Arc::new(self.items),
            purchases: Arc::new(self.purchases),
            orders: Arc::new(self.orders),
        }
    }

    pub(crate) fn into_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(self.into_app_context())))
                .hoop(inject_owner)
                .push(route),
        )
    }
}

pub(crate) fn make_item(cart: CartUuid, quantity: u32, price: u64) -> CartItem {
    CartItem {
        uuid: CartItemUuid::new(),
        cart_uuid: cart,
        movie_uuid: MovieUuid::new(),
        quantity,
        price,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart(uuid: CartUuid, name: &str) -> Cart {
    Cart {
        uuid,
        owner_uuid: TEST_OWNER_UUID,
        name: name.to_string(),
        items: Vec::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(uuid: OrderUuid, cart: CartUuid, lines: &[(u32, u64)]) -> Order {
    let lines: Vec<OrderLine> = lines
        .iter()
        .map(|&(quantity, price)| OrderLine {
            uuid: OrderLineUuid::new(),
            order_uuid: uuid,
            movie_uuid: MovieUuid::new(),
            quantity,
            price,
        })
        .collect();

    Order {
        uuid,
        owner_uuid: TEST_OWNER_UUID,
        cart_uuid: Some(cart),
        total: lines.iter().filter_map(OrderLine::subtotal).sum(),
        lines,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
