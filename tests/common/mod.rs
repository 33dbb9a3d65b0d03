//! Helpers for integration tests.

#![allow(dead_code)]

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;

use blog_export::schema::{article, article_cat, category};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary database used in integration tests.
pub struct TestDb {
    tempfile: NamedTempFile,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let test_db = TestDb { tempfile };
        test_db
            .connection()
            .run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        test_db
    }

    pub fn url(&self) -> String {
        self.tempfile
            .path()
            .to_str()
            .expect("temp path is unicode")
            .to_string()
    }

    pub fn connection(&self) -> SqliteConnection {
        SqliteConnection::establish(&self.url()).expect("Failed to open SQLite connection")
    }
}

pub fn timestamp(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
}

pub fn insert_article(
    conn: &mut SqliteConnection,
    id: i32,
    title: &str,
    inactive: i32,
    publish_date: Option<NaiveDateTime>,
    friendly_url: Option<&str>,
    content: Option<&str>,
) {
    diesel::insert_into(article::table)
        .values((
            article::systemid.eq(id),
            article::title.eq(title),
            article::inactive.eq(inactive),
            article::publishdate.eq(publish_date),
            article::keywords.eq(None::<String>),
            article::friendlyurl.eq(friendly_url),
            article::maincontent.eq(content),
        ))
        .execute(conn)
        .expect("should insert article");
}

pub fn insert_category(conn: &mut SqliteConnection, id: i32, name: &str, color: Option<&str>) {
    diesel::insert_into(category::table)
        .values((
            category::systemid.eq(id),
            category::catname.eq(name),
            category::catcolor.eq(color),
        ))
        .execute(conn)
        .expect("should insert category");
}

pub fn link(conn: &mut SqliteConnection, article_id: i32, category_id: i32) {
    diesel::insert_into(article_cat::table)
        .values((
            article_cat::articleid.eq(article_id),
            article_cat::categoryid.eq(category_id),
        ))
        .execute(conn)
        .expect("should link category");
}
