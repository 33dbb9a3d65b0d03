use diesel::prelude::*;

use crate::domain::article::Article;
use crate::models::article::Article as DbArticle;
use crate::repository::{ArticleReader, DieselRepository, RepositoryResult};

impl ArticleReader for DieselRepository {
    fn list_articles(&mut self) -> RepositoryResult<Vec<Article>> {
        use crate::schema::article;

        let conn = self.conn();

        let items = article::table
            .select(DbArticle::as_select())
            .load::<DbArticle>(conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<RepositoryResult<Vec<Article>>>()?;

        Ok(items)
    }
}
