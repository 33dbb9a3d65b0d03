use diesel::sqlite::SqliteConnection;

use crate::db::establish_connection;
use crate::domain::article::Article;
use crate::domain::category::Category;
use crate::domain::types::ArticleId;

pub mod article;
pub mod category;
pub mod errors;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// Owns the single connection used for a run. Dropping the repository closes
/// the connection, including on early error returns.
pub struct DieselRepository {
    conn: SqliteConnection,
}

impl DieselRepository {
    /// Create a new repository from an established connection.
    pub fn new(conn: SqliteConnection) -> Self {
        Self { conn }
    }

    /// Open a connection to `database_url` and wrap it.
    pub fn connect(database_url: &str) -> RepositoryResult<Self> {
        Ok(Self::new(establish_connection(database_url)?))
    }

    fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }
}

impl Drop for DieselRepository {
    fn drop(&mut self) {
        log::debug!("Closing database connection");
    }
}

/// Read-only operations for article entities.
pub trait ArticleReader {
    /// Load every article in source order. Categories are left empty.
    fn list_articles(&mut self) -> RepositoryResult<Vec<Article>>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List the categories linked to an article, in query result order.
    fn list_categories_for_article(
        &mut self,
        article_id: ArticleId,
    ) -> RepositoryResult<Vec<Category>>;
}
