//! Export orchestration: load, enrich, render and write every article.

use std::path::{Path, PathBuf};

use crate::domain::article::Article;
use crate::domain::types::PublicationStatus;
use crate::render::{Template, render_article, write_rendered};
use crate::repository::{ArticleReader, CategoryReader, DieselRepository};
use crate::transform::enrich_article;

use super::ExportResult;

/// Everything a run needs once configuration has been resolved.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Connection URL with credentials already applied.
    pub database_url: String,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    pub file_extension: String,
}

/// Where rendered files go.
#[derive(Debug, Clone, Copy)]
pub struct OutputTarget<'a> {
    pub dir: &'a Path,
    pub extension: &'a str,
}

/// Outcome of a completed run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Written files in processing order.
    pub written: Vec<PathBuf>,
    pub published: usize,
    pub drafts: usize,
}

/// Load every article and run the enrichment steps on each, in fetch order.
pub fn load_enriched_articles<R>(repo: &mut R) -> ExportResult<Vec<Article>>
where
    R: ArticleReader + CategoryReader,
{
    let articles = repo.list_articles()?;
    log::info!("Loaded {} articles", articles.len());

    let mut enriched = Vec::with_capacity(articles.len());
    for article in articles {
        let categories = repo.list_categories_for_article(article.id)?;
        enriched.push(enrich_article(article, categories));
    }
    Ok(enriched)
}

/// Render and write all articles. Stops at the first error; files already
/// written stay on disk.
pub fn export_articles<R>(
    repo: &mut R,
    template: &Template,
    target: OutputTarget<'_>,
) -> ExportResult<ExportSummary>
where
    R: ArticleReader + CategoryReader,
{
    let articles = load_enriched_articles(repo)?;

    let mut summary = ExportSummary::default();
    for article in &articles {
        let rendered = render_article(template, article, target.extension);
        let path = write_rendered(target.dir, &rendered)?;
        log::debug!("Wrote article {} to {}", article.id, path.display());

        match article.status() {
            PublicationStatus::Published => summary.published += 1,
            PublicationStatus::Draft => summary.drafts += 1,
        }
        summary.written.push(path);
    }
    Ok(summary)
}

/// Full run: connect, load the template, export, close the connection.
pub fn run(settings: &ExportSettings) -> ExportResult<ExportSummary> {
    let mut repo = DieselRepository::connect(&settings.database_url)?;
    log::info!("Connected to database");

    let template = Template::load(&settings.template_path)?;

    let target = OutputTarget {
        dir: &settings.output_dir,
        extension: &settings.file_extension,
    };
    let summary = export_articles(&mut repo, &template, target)?;

    log::info!(
        "Exported {} articles ({} published, {} drafts) to {}",
        summary.written.len(),
        summary.published,
        summary.drafts,
        settings.output_dir.display()
    );
    Ok(summary)
}
