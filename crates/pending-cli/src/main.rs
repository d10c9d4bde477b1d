mod command;
pub mod constants;
pub mod core;
pub mod validation;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

use crate::command::check::{command_check, CheckCommandParameters};
use crate::command::endpoints::{command_endpoints, EndpointsCommandParameters};
use crate::command::interactive::{command_interactive, InteractiveCommandParameters};
use crate::command::reasons::command_reasons;
use crate::constants::DEFAULT_VERBOSITY;
use crate::core::{Error, Fmt, Verbosity};

#[derive(Parser)]
#[command(name = "cfx-pending", about = "Find out why the transactions of a Conflux account are stuck pending")]
struct Cli {
    #[clap(long, global = true, value_enum, default_value = DEFAULT_VERBOSITY)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Diagnose the pending transactions of one or more accounts")]
    Check(CheckCommandParameters),

    #[command(about = "Read addresses from stdin and diagnose them one after the other")]
    Interactive(InteractiveCommandParameters),

    #[command(about = "Check that the public endpoints answer for the expected networks")]
    Endpoints(EndpointsCommandParameters),

    #[command(about = "List the reasons why a transaction can be pending")]
    Reasons,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let subscriber = Registry::default().with(Fmt::layer(&cli.verbosity));
    tracing::subscriber::set_global_default(subscriber).map_err(|e| Error::Execution(e.to_string()))?;

    match cli.command {
        Commands::Check(params) => command_check(params).await?,
        Commands::Interactive(params) => command_interactive(params).await?,
        Commands::Endpoints(params) => command_endpoints(params).await?,
        Commands::Reasons => command_reasons(),
    }

    Ok(())
}
