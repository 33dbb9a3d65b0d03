use serde::{Deserialize, Serialize};

use crate::domain::types::CategoryId;

/// Category attached to an article. Rendered as a tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Display colour from the source schema. Not used when rendering.
    pub color: Option<String>,
}
