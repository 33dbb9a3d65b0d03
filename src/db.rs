//! Database connection bootstrap.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::repository::errors::RepositoryResult;

/// Login used to expand `{user}` and `{password}` in a database URL.
#[derive(Clone)]
pub struct DbCredentials {
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for DbCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

impl DbCredentials {
    /// Substitute the credentials into a connection URL template.
    pub fn apply(&self, database_url: &str) -> String {
        database_url
            .replace("{user}", &self.user)
            .replace("{password}", &self.password)
    }
}

/// Open a single, unpooled connection.
pub fn establish_connection(database_url: &str) -> RepositoryResult<SqliteConnection> {
    Ok(SqliteConnection::establish(database_url)?)
}
