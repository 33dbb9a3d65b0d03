use diesel::prelude::*;

use crate::domain::category::Category;
use crate::domain::types::ArticleId;
use crate::models::category::Category as DbCategory;
use crate::repository::{CategoryReader, DieselRepository, RepositoryResult};

impl CategoryReader for DieselRepository {
    fn list_categories_for_article(
        &mut self,
        article_id: ArticleId,
    ) -> RepositoryResult<Vec<Category>> {
        use crate::schema::{article_cat, category};

        let conn = self.conn();

        let items: Vec<Category> = article_cat::table
            .inner_join(category::table)
            .filter(article_cat::articleid.eq(article_id.get()))
            .select(DbCategory::as_select())
            .load::<DbCategory>(conn)?
            .into_iter()
            .map(Category::from)
            .collect();

        Ok(items)
    }
}
