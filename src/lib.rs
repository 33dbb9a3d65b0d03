//! Core library exports for the blog exporter.
//!
//! Reads articles and their categories from the blog database, normalises
//! the content and renders one JBake source file per article.

#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod render;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;
#[cfg(feature = "data")]
pub mod transform;
