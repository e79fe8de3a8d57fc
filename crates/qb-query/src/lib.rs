//! # qb-query
//!
//! Pure, synchronous engines over already-loaded qbank records:
//! - [`filter`]: question filter and stable sort
//! - [`counts`]: per-category and per-subcategory question counts
//! - [`jobs`]: job-application sort and active/archived split
//! - [`detail`]: question detail assembly and taxonomy summaries
//! - [`stats`]: dashboard statistics
//! - [`study`]: flashcard and quiz session state
//! - [`validate`]: form-level input checks
//!
//! Nothing here performs I/O or mutates its input.

pub mod compare;
pub mod counts;
pub mod detail;
pub mod filter;
pub mod jobs;
pub mod stats;
pub mod study;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;
