use thiserror::Error;

use crate::domain::types::ArticleId;

/// Errors raised while reading articles and categories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The database could not be reached or refused the login.
    #[error("connection error: {0}")]
    Connection(#[from] diesel::ConnectionError),
    /// A query failed or returned a row that could not be decoded.
    #[error("query error: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("article {0} has no publish date")]
    MissingPublishDate(ArticleId),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
