//! JBake file rendering: placeholder substitution and output naming.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::article::Article;

/// Value substituted for `%type%`.
pub const ARTICLE_TYPE: &str = "post";
/// Date layout used in front matter and file names.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors raised while loading the template or writing output files.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template {path}: {source}")]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Tokens recognised inside a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    Title,
    Date,
    Type,
    Tags,
    Status,
    MainContent,
}

impl Placeholder {
    pub const ALL: [Placeholder; 6] = [
        Self::Title,
        Self::Date,
        Self::Type,
        Self::Tags,
        Self::Status,
        Self::MainContent,
    ];

    /// Literal token text as it appears in the template.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Title => "%title%",
            Self::Date => "%date%",
            Self::Type => "%type%",
            Self::Tags => "%tags%",
            Self::Status => "%status%",
            Self::MainContent => "%maincontent%",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Placeholder),
}

/// Template split into literal text and placeholders.
///
/// Rendering walks the segments once, so substituted values are emitted
/// verbatim even if they contain token text themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    // Unlike chained `str::replace` calls, one pass never expands tokens that
    // appear inside substituted values.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal_start = 0;
        let mut pos = 0;

        while let Some(offset) = source[pos..].find('%') {
            let at = pos + offset;
            match Placeholder::ALL
                .into_iter()
                .find(|placeholder| source[at..].starts_with(placeholder.token()))
            {
                Some(placeholder) => {
                    if literal_start < at {
                        segments.push(Segment::Literal(source[literal_start..at].to_string()));
                    }
                    segments.push(Segment::Field(placeholder));
                    pos = at + placeholder.token().len();
                    literal_start = pos;
                }
                None => pos = at + 1,
            }
        }

        if literal_start < source.len() {
            segments.push(Segment::Literal(source[literal_start..].to_string()));
        }

        Self { segments }
    }

    /// Read and parse a template file.
    pub fn load(path: &Path) -> RenderResult<Self> {
        let source = fs::read_to_string(path).map_err(|source| RenderError::TemplateLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&source))
    }

    /// Substitute every placeholder with the value returned by `value`.
    pub fn render_with<'a>(&self, value: impl Fn(Placeholder) -> &'a str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(placeholder) => out.push_str(value(*placeholder)),
            }
        }
        out
    }
}

/// Output file contents together with its derived name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedArticle {
    pub file_name: String,
    pub body: String,
}

/// Replace every character that is not an ASCII letter or digit with `-`.
pub fn sanitize_slug(source: &str) -> String {
    source
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// `<date>_<slug>.<extension>` for an article.
pub fn file_name(article: &Article, formatted_date: &str, extension: &str) -> String {
    format!(
        "{formatted_date}_{}.{extension}",
        sanitize_slug(article.slug_source())
    )
}

/// Fill the template with an enriched article.
pub fn render_article(template: &Template, article: &Article, extension: &str) -> RenderedArticle {
    let date = article.publish_date.format(DATE_FORMAT).to_string();
    let tags = article.tags();
    let status = article.status();

    let body = template.render_with(|placeholder| match placeholder {
        Placeholder::Title => article.title.as_str(),
        Placeholder::Date => date.as_str(),
        Placeholder::Type => ARTICLE_TYPE,
        Placeholder::Tags => tags.as_str(),
        Placeholder::Status => status.as_str(),
        Placeholder::MainContent => article.content_or_empty(),
    });

    RenderedArticle {
        file_name: file_name(article, &date, extension),
        body,
    }
}

/// Write a rendered article below `output_dir`, creating the directory if
/// needed and overwriting any existing file.
pub fn write_rendered(output_dir: &Path, rendered: &RenderedArticle) -> RenderResult<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| RenderError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(&rendered.file_name);
    fs::write(&path, &rendered.body).map_err(|source| RenderError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::{ArticleId, CategoryId, InactiveFlag};
    use chrono::NaiveDate;

    const TEMPLATE: &str = "title=%title%\ndate=%date%\ntype=%type%\ntags=%tags%\nstatus=%status%\n~~~~~~\n%maincontent%\n";

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(3),
            inactive: InactiveFlag::ACTIVE,
            publish_date: NaiveDate::from_ymd_opt(2020, 5, 1)
                .unwrap()
                .and_hms_opt(13, 45, 0)
                .unwrap(),
            title: "Title".into(),
            keywords: Some("rust".into()),
            content: Some("<p>Body</p>".into()),
            friendly_url: Some("My Post! #1".into()),
            categories: vec![
                Category {
                    id: CategoryId::new(4),
                    name: "News".into(),
                    color: None,
                },
                Category {
                    id: CategoryId::new(2),
                    name: "Life".into(),
                    color: None,
                },
            ],
        }
    }

    #[test]
    fn file_name_uses_friendly_url() {
        let article = sample_article();
        assert_eq!(
            file_name(&article, "2020-05-01", "html"),
            "2020-05-01_My-Post---1.html"
        );
    }

    #[test]
    fn file_name_falls_back_to_title() {
        let article = Article {
            friendly_url: None,
            title: "Hello, wörld".into(),
            ..sample_article()
        };
        assert_eq!(
            render_article(&Template::parse(""), &article, "html").file_name,
            "2020-05-01_Hello--w-rld.html"
        );
    }

    #[test]
    fn slug_replaces_each_character_once() {
        assert_eq!(sanitize_slug("a|b_c.d"), "a-b-c-d");
        assert_eq!(sanitize_slug("AZaz09"), "AZaz09");
        assert_eq!(sanitize_slug("  "), "--");
    }

    #[test]
    fn renders_all_tokens() {
        let rendered = render_article(&Template::parse(TEMPLATE), &sample_article(), "html");
        assert_eq!(
            rendered.body,
            "title=Title\ndate=2020-05-01\ntype=post\ntags=News,Life\nstatus=published\n~~~~~~\n<p>Body</p>\n"
        );
    }

    #[test]
    fn replaces_repeated_tokens_and_keeps_other_text() {
        let template = Template::parse("%title% 100% %title%%% %unknown% %date");
        let rendered = render_article(&template, &sample_article(), "html");
        assert_eq!(rendered.body, "Title 100% Title%% %unknown% %date");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let article = Article {
            title: "About %date%".into(),
            ..sample_article()
        };
        let rendered = render_article(&Template::parse("%title%|%date%"), &article, "html");
        assert_eq!(rendered.body, "About %date%|2020-05-01");
    }

    #[test]
    fn draft_without_categories() {
        let article = Article {
            inactive: InactiveFlag::new(2),
            categories: vec![],
            content: None,
            ..sample_article()
        };
        let rendered = render_article(
            &Template::parse("[%tags%][%status%][%maincontent%]"),
            &article,
            "html",
        );
        assert_eq!(rendered.body, "[][draft][]");
    }

    #[test]
    fn writes_and_overwrites_output() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("nested").join("jbakefiles");
        let rendered = RenderedArticle {
            file_name: "2020-05-01_a.html".into(),
            body: "first".into(),
        };

        let path = write_rendered(&output_dir, &rendered).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        let rendered = RenderedArticle {
            body: "second".into(),
            ..rendered
        };
        let again = write_rendered(&output_dir, &rendered).unwrap();
        assert_eq!(again, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn missing_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Template::load(&dir.path().join("missing.html")).unwrap_err();
        assert!(matches!(err, RenderError::TemplateLoad { .. }));
    }
}
