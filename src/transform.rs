//! Per-article enrichment steps applied between loading and rendering.

use crate::domain::article::Article;
use crate::domain::category::Category;
use crate::domain::types::InactiveFlag;

/// Opening tag rewritten by [`highlight_code_blocks`].
pub const PRE_TAG: &str = "<pre>";
/// Replacement carrying the syntax highlighter hook.
pub const PRETTYPRINT_PRE_TAG: &str = "<pre class=\"prettyprint\">";

/// Replace the article's categories with `categories`.
pub fn attach_categories(article: Article, categories: Vec<Category>) -> Article {
    article.with_categories(categories)
}

/// Articles without content get an empty body and are forced into draft.
pub fn normalize_missing_content(article: Article) -> Article {
    if article.content.is_some() {
        return article;
    }
    article
        .with_content(String::new())
        .with_inactive(InactiveFlag::INACTIVE)
}

/// Add the `prettyprint` class to every literal `<pre>` tag in the content.
///
/// Plain substring replacement; the surrounding markup is not parsed.
pub fn highlight_code_blocks(article: Article) -> Article {
    match article.content.as_deref() {
        Some(content) if content.contains(PRE_TAG) => {
            let content = content.replace(PRE_TAG, PRETTYPRINT_PRE_TAG);
            article.with_content(content)
        }
        _ => article,
    }
}

/// Run all enrichment steps in order.
pub fn enrich_article(article: Article, categories: Vec<Category>) -> Article {
    let article = attach_categories(article, categories);
    let article = normalize_missing_content(article);
    highlight_code_blocks(article)
}
