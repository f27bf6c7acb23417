mod cli;
mod generate;
mod infra;
mod routes;
mod server;

use people_iq::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
