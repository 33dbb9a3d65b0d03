//! Domain entities and value objects for the article export.

pub mod article;
pub mod category;
pub mod types;
