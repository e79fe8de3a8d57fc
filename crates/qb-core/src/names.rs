//! Display-name resolution for taxonomy references.
//!
//! Questions and subcategories hold raw ids. When the referenced record is
//! missing the raw id is shown instead, and an orphaned subcategory is shown
//! under [`UNKNOWN_CATEGORY`].

use crate::entities::{Category, SubCategory, Tag};

/// Parent label for a subcategory whose category no longer exists.
pub const UNKNOWN_CATEGORY: &str = "unknown category";

/// A record with an id and a display name.
pub trait Named {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

impl Named for Category {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for SubCategory {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Tag {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

/// Resolve `id` to its record's name, or return `id` itself when absent.
#[must_use]
pub fn resolve_name<'a, T: Named>(items: &'a [T], id: &'a str) -> &'a str {
    items
        .iter()
        .find(|item| item.id() == id)
        .map_or(id, Named::name)
}

/// Name of a subcategory's parent category, or [`UNKNOWN_CATEGORY`].
#[must_use]
pub fn parent_name<'a>(sub: &SubCategory, categories: &'a [Category]) -> &'a str {
    categories
        .iter()
        .find(|c| c.id == sub.category_id)
        .map_or(UNKNOWN_CATEGORY, |c| c.name.as_str())
}
