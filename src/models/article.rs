use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::article::Article as DomainArticle;
use crate::domain::types::{ArticleId, InactiveFlag};
use crate::repository::errors::RepositoryError;

/// Diesel model representing the `article` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::article)]
#[diesel(primary_key(systemid))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Article {
    pub systemid: i32,
    pub title: String,
    pub inactive: i32,
    pub publishdate: Option<NaiveDateTime>,
    pub keywords: Option<String>,
    pub friendlyurl: Option<String>,
    pub maincontent: Option<String>,
}

impl TryFrom<Article> for DomainArticle {
    type Error = RepositoryError;

    fn try_from(article: Article) -> Result<Self, Self::Error> {
        let id = ArticleId::new(article.systemid);
        let publish_date = article
            .publishdate
            .ok_or(RepositoryError::MissingPublishDate(id))?;

        Ok(Self {
            id,
            inactive: InactiveFlag::new(article.inactive),
            publish_date,
            title: article.title,
            keywords: article.keywords,
            content: article.maincontent,
            friendly_url: article.friendlyurl,
            categories: Vec::new(),
        })
    }
}
