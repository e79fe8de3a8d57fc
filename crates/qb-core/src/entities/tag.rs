use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A tag with its seeded usage count. Tags are read-only at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub count: u32,
}
