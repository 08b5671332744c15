mod cli;
mod commands;
mod render;

use app_tracker::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
