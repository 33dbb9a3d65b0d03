use std::collections::HashMap;

use crate::domain::article::Article;
use crate::domain::category::Category;
use crate::domain::types::ArticleId;
use crate::repository::{ArticleReader, CategoryReader, RepositoryError, RepositoryResult};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    articles: Vec<Article>,
    categories: HashMap<ArticleId, Vec<Category>>,
    failing_article: Option<ArticleId>,
    pub category_lookups: Vec<ArticleId>,
}

impl TestRepository {
    pub fn new(articles: Vec<Article>, categories: Vec<(ArticleId, Vec<Category>)>) -> Self {
        Self {
            articles,
            categories: categories.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Make the category lookup for `article_id` fail with a query error.
    pub fn fail_categories_for(mut self, article_id: ArticleId) -> Self {
        self.failing_article = Some(article_id);
        self
    }
}

impl ArticleReader for TestRepository {
    fn list_articles(&mut self) -> RepositoryResult<Vec<Article>> {
        Ok(self.articles.clone())
    }
}

impl CategoryReader for TestRepository {
    fn list_categories_for_article(
        &mut self,
        article_id: ArticleId,
    ) -> RepositoryResult<Vec<Category>> {
        self.category_lookups.push(article_id);
        if self.failing_article == Some(article_id) {
            return Err(RepositoryError::Query(diesel::result::Error::NotFound));
        }
        Ok(self
            .categories
            .get(&article_id)
            .cloned()
            .unwrap_or_default())
    }
}
