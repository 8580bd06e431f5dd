use clap::{Parser, Subcommand};
use reelcart_app::database::{self, Db};

mod cart;
mod db;
mod movie;

#[derive(Debug, Parser)]
#[command(name = "reelcart-app", about = "Reelcart CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Movie(movie::MovieCommand),
    Cart(cart::CartCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Movie(command) => movie::run(command).await,
            Commands::Cart(command) => cart::run(command).await,
        }
    }
}

pub(crate) async fn connect(database_url: &str) -> Result<Db, String> {
    database::connect(database_url)
        .await
        .map(Db::new)
        .map_err(|error| format!("failed to connect to database: {error}"))
}
