mod analyze;
mod cli;
mod infra;
mod routes;
mod server;

use rent_to_own::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
