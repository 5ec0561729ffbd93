mod cli;
mod demo;
mod infra;
mod report;
mod routes;
mod server;

use case_intel::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
