use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::CategoryId;

/// Diesel model representing the `category` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::category)]
#[diesel(primary_key(systemid))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub systemid: i32,
    pub catname: String,
    pub catcolor: Option<String>,
}

impl From<Category> for DomainCategory {
    fn from(category: Category) -> Self {
        Self {
            id: CategoryId::new(category.systemid),
            name: category.catname,
            color: category.catcolor,
        }
    }
}
