use clap::{Args, Subcommand};

mod seed;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Create the sample carts for an owner
    Seed(seed::SeedCartsArgs),
}

pub(crate) async fn run(command: CartCommand) -> Result<(), String> {
    match command.command {
        CartSubcommand::Seed(args) => seed::run(args).await,
    }
}
