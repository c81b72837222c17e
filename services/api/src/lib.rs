mod adapter;
mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use blood_priority::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
