mod cli;
mod infra;
mod render;
mod report;
mod session;

use eviction_scorecard::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
