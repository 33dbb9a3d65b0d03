//! Diesel row models and their conversion into domain values.

pub mod article;
pub mod category;
