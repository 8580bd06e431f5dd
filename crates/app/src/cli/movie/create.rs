use clap::Args;
use reelcart_app::domain::movies::{
    CatalogService, PgCatalogService,
    models::{MovieUuid, NewMovie},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateMovieArgs {
    /// Movie title
    #[arg(long)]
    name: String,

    /// Price in minor currency units
    #[arg(long)]
    price: u64,

    #[arg(long, default_value = "")]
    description: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional movie UUID; generated when omitted
    #[arg(long)]
    movie_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateMovieArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let db = crate::cli::connect(&args.database_url).await?;

    let movie = PgCatalogService::new(db)
        .create_movie(NewMovie {
            uuid: args.movie_uuid.map_or_else(MovieUuid::new, MovieUuid::from_uuid),
            name: args.name.trim().to_string(),
            description: args.description,
            price: args.price,
        })
        .await
        .map_err(|error| format!("failed to create movie: {error}"))?;

    println!("movie_uuid: {}", movie.uuid);
    println!("movie_name: {}", movie.name);
    println!("price: {}", movie.price);

    Ok(())
}
