use clap::{Args, Subcommand};

mod create;
mod set_price;

#[derive(Debug, Args)]
pub(crate) struct MovieCommand {
    #[command(subcommand)]
    command: MovieSubcommand,
}

#[derive(Debug, Subcommand)]
enum MovieSubcommand {
    /// Add a movie to the catalog
    Create(create::CreateMovieArgs),
    /// Change a movie's current price
    SetPrice(set_price::SetPriceArgs),
}

pub(crate) async fn run(command: MovieCommand) -> Result<(), String> {
    match command.command {
        MovieSubcommand::Create(args) => create::run(args).await,
        MovieSubcommand::SetPrice(args) => set_price::run(args).await,
    }
}
