use crate::generate::{run_batch, RunArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use people_iq::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "people-iq-api",
    about = "Score HR records into attrition, promotion and wellbeing predictions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the prediction report from the configured tables (default command)
    Run(RunArgs),
    /// Generate the report once and serve it over HTTP
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Primary ML feature table to score at startup
    #[arg(long)]
    pub(crate) ml_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Command::Run(RunArgs::default()));

    match command {
        Command::Run(args) => run_batch(args),
        Command::Serve(args) => server::run(args).await,
    }
}
