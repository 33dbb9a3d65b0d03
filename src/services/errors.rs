use thiserror::Error;

use crate::render::RenderError;
use crate::repository::errors::RepositoryError;

/// Any failure that aborts an export run.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Convenient alias for results returned from service functions.
pub type ExportResult<T> = Result<T, ExportError>;
