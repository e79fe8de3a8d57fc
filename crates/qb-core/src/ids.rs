//! ID prefixes for store-assigned identifiers.
//!
//! IDs look like `qst-a3f8b2c1`: a three-letter prefix, a dash, and eight
//! lowercase hex characters.

pub const PREFIX_QUESTION: &str = "qst";
pub const PREFIX_CATEGORY: &str = "cat";
pub const PREFIX_SUBCATEGORY: &str = "sub";
pub const PREFIX_TAG: &str = "tag";
pub const PREFIX_JOB: &str = "job";

/// Every prefix the store hands out.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_QUESTION,
    PREFIX_CATEGORY,
    PREFIX_SUBCATEGORY,
    PREFIX_TAG,
    PREFIX_JOB,
];
