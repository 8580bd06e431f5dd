use std::collections::HashSet;

use clap::Args;
use reelcart_app::domain::{
    carts::{
        CartsService, CartsServiceError, PgCartsService,
        models::{CartUuid, NewCart},
    },
    owners::OwnerUuid,
};
use uuid::Uuid;

const SAMPLE_CARTS: [&str; 3] = ["My Favorites", "Action Movies", "Comedy Collection"];

#[derive(Debug, Args)]
pub(crate) struct SeedCartsArgs {
    /// Owner the sample carts are created for
    #[arg(long)]
    owner: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeedOutcome {
    Created(CartUuid),
    Exists,
    Skipped,
}

/// Creates each sample cart the owner does not hold yet. Names already held
/// are reported before the cart ceiling is consulted, so reruns say "exists".
async fn seed_carts(
    service: &dyn CartsService,
    owner: OwnerUuid,
) -> Result<Vec<(&'static str, SeedOutcome)>, CartsServiceError> {
    let held: HashSet<String> = service
        .list_carts(owner)
        .await?
        .into_iter()
        .map(|cart| cart.name)
        .collect();

    let mut outcomes = Vec::with_capacity(SAMPLE_CARTS.len());

    for name in SAMPLE_CARTS {
        if held.contains(name) {
            outcomes.push((name, SeedOutcome::Exists));

            continue;
        }

        let outcome = match service
            .create_cart(
                owner,
                NewCart {
                    uuid: CartUuid::new(),
                    name: name.to_string(),
                },
            )
            .await
        {
            Ok(cart) => SeedOutcome::Created(cart.uuid),
            Err(CartsServiceError::DuplicateName) => SeedOutcome::Exists,
            Err(CartsServiceError::CartLimitExceeded) => SeedOutcome::Skipped,
            Err(error) => return Err(error),
        };

        outcomes.push((name, outcome));
    }

    Ok(outcomes)
}

pub(crate) async fn run(args: SeedCartsArgs) -> Result<(), String> {
    let db = crate::cli::connect(&args.database_url).await?;
    let service = PgCartsService::new(db);
    let owner = OwnerUuid::from_uuid(args.owner);

    let outcomes = seed_carts(&service, owner)
        .await
        .map_err(|error| format!("failed to seed carts: {error}"))?;

    for (name, outcome) in outcomes {
        match outcome {
            SeedOutcome::Created(uuid) => println!("created: {name} ({uuid})"),
            SeedOutcome::Exists => println!("exists: {name}"),
            SeedOutcome::Skipped => {
                println!("skipped: {name} (owner already holds the maximum number of carts)");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use reelcart_app::domain::carts::{MockCartsService, models::Cart};
    use testresult::TestResult;

    use super::*;

    fn make_cart(owner: OwnerUuid, name: &str) -> Cart {
        Cart {
            uuid: CartUuid::new(),
            owner_uuid: owner,
            name: name.to_string(),
            items: Vec::new(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn rerun_reports_every_sample_cart_as_existing() -> TestResult {
        let owner = OwnerUuid::new();
        let held: Vec<Cart> = SAMPLE_CARTS
            .iter()
            .map(|name| make_cart(owner, name))
            .collect();

        let mut service = MockCartsService::new();

        service
            .expect_list_carts()
            .once()
            .withf(move |o| *o == owner)
            .return_once(move |_| Ok(held));

        service.expect_create_cart().never();

        let outcomes = seed_carts(&service, owner).await?;

        assert_eq!(
            outcomes,
            vec![
                ("My Favorites", SeedOutcome::Exists),
                ("Action Movies", SeedOutcome::Exists),
                ("Comedy Collection", SeedOutcome::Exists),
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn first_run_creates_missing_carts_and_skips_past_the_limit() -> TestResult {
        let owner = OwnerUuid::new();

        let mut service = MockCartsService::new();

        service
            .expect_list_carts()
            .once()
            .return_once(move |_| Ok(vec![make_cart(owner, "Action Movies")]));

        service
            .expect_create_cart()
            .times(2)
            .returning(|owner, new| {
                if new.name == "Comedy Collection" {
                    Err(CartsServiceError::CartLimitExceeded)
                } else {
                    Ok(Cart {
                        uuid: new.uuid,
                        ..make_cart(owner, &new.name)
                    })
                }
            });

        let outcomes = seed_carts(&service, owner).await?;

        assert!(matches!(
            outcomes.first(),
            Some(("My Favorites", SeedOutcome::Created(_)))
        ));
        assert_eq!(outcomes.get(1), Some(&("Action Movies", SeedOutcome::Exists)));
        assert_eq!(
            outcomes.get(2),
            Some(&("Comedy Collection", SeedOutcome::Skipped))
        );

        Ok(())
    }
}
