use thiserror::Error;

/// Console plumbing failure. Inventory rejections are not errors at this level.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("console io error: {0}")]
    Io(#[from] std::io::Error),
}
