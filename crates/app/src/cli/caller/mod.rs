use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct CallerCommand {
    #[command(subcommand)]
    command: CallerSubcommand,
}

#[derive(Debug, Subcommand)]
enum CallerSubcommand {
    Create(create::CreateCallerArgs),
}

pub(crate) async fn run(command: CallerCommand) -> Result<(), String> {
    match command.command {
        CallerSubcommand::Create(args) => create::run(args).await,
    }
}
