mod cli;
mod infra;
mod routes;
mod server;

use lpa_caseworker::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
