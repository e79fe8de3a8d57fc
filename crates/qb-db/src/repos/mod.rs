//! Repository modules implementing CRUD operations for all qbank records.
//!
//! Each module adds methods to `QbService` via `impl QbService` blocks.

pub mod category;
pub mod counts;
pub mod job;
pub mod question;
pub mod seed;
pub mod subcategory;
pub mod tag;
