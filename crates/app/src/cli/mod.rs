use clap::{Parser, Subcommand};

mod caller;
mod db;

#[derive(Debug, Parser)]
#[command(name = "showcase-app", about = "Showcase CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Caller(caller::CallerCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Caller(command) => caller::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
