mod cli;
mod render;

use admissions_desk::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
