use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Top level of the question taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Second level of the question taxonomy, owned by a [`Category`].
///
/// `category_id` is not enforced; an orphaned subcategory is shown under an
/// unknown parent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub created_at: DateTime<Utc>,
}
