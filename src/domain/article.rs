use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::{ArticleId, InactiveFlag, PublicationStatus};

/// Blog article loaded from the `article` table.
///
/// Values are never mutated in place; pipeline steps build a new value with
/// the `with_*` helpers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub inactive: InactiveFlag,
    pub publish_date: NaiveDateTime,
    pub title: String,
    pub keywords: Option<String>,
    /// `None` when the source column is NULL.
    pub content: Option<String>,
    pub friendly_url: Option<String>,
    /// Empty until categories are attached.
    pub categories: Vec<Category>,
}

impl Article {
    /// Copy of this article with `categories` replaced.
    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        Self { categories, ..self }
    }

    /// Copy of this article with `content` replaced.
    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..self
        }
    }

    /// Copy of this article with the `inactive` flag replaced.
    pub fn with_inactive(self, inactive: InactiveFlag) -> Self {
        Self { inactive, ..self }
    }

    pub fn status(&self) -> PublicationStatus {
        self.inactive.status()
    }

    /// Article content, or the empty string when absent.
    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    /// Comma-joined category names in attachment order.
    pub fn tags(&self) -> String {
        self.categories
            .iter()
            .map(|category| category.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Source text for the output filename: friendly URL, else title.
    pub fn slug_source(&self) -> &str {
        self.friendly_url.as_deref().unwrap_or(&self.title)
    }
}
