//! Test Helpers

use crate::{
    domain::{
        carts::{
            CartItemsService, CartsService, CartsServiceError,
            models::{Cart, CartItem, CartItemUuid, CartUuid, NewCart, NewCartItem},
        },
        movies::{
            CatalogService, CatalogServiceError,
            models::{Movie, MovieUuid, NewMovie},
        },
        owners::OwnerUuid,
    },
    test::TestContext,
};

pub(crate) async fn create_cart(
    ctx: &TestContext,
    owner: OwnerUuid,
    name: &str,
) -> Result<Cart, CartsServiceError> {
    ctx.carts
        .create_cart(
            owner,
            NewCart {
                uuid: CartUuid::new(),
                name: name.to_string(),
            },
        )
        .await
}

pub(crate) async fn create_movie(ctx: &TestContext, price: u64) -> Result<Movie, CatalogServiceError> {
    let uuid = MovieUuid::new();

    ctx.catalog
        .create_movie(NewMovie {
            uuid,
            name: format!("Movie {uuid}"),
            description: String::new(),
            price,
        })
        .await
}

pub(crate) async fn add_item(
    ctx: &TestContext,
    owner: OwnerUuid,
    cart: CartUuid,
    movie: MovieUuid,
    quantity: u32,
) -> Result<CartItem, CartsServiceError> {
    ctx.items
        .add_item(
            owner,
            cart,
            NewCartItem {
                uuid: CartItemUuid::new(),
                movie_uuid: movie,
                quantity,
            },
        )
        .await
}
