use clap::Args;
use reelcart_app::domain::movies::{CatalogService, PgCatalogService, models::MovieUuid};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct SetPriceArgs {
    #[arg(long)]
    movie_uuid: Uuid,

    /// New price in minor currency units
    #[arg(long)]
    price: u64,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SetPriceArgs) -> Result<(), String> {
    let db = crate::cli::connect(&args.database_url).await?;

    let movie = PgCatalogService::new(db)
        .update_movie_price(MovieUuid::from_uuid(args.movie_uuid), args.price)
        .await
        .map_err(|error| format!("failed to update price: {error}"))?;

    println!("movie_uuid: {}", movie.uuid);
    println!("price: {}", movie.price);
    println!("existing cart lines keep the price they were quoted");

    Ok(())
}
