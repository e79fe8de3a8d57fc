//! Entity structs for all qbank domain objects.
//!
//! Each entity maps to a table in the libSQL store. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod category;
mod job;
mod question;
mod tag;

pub use category::{Category, SubCategory};
pub use job::{Job, NewJob};
pub use question::{EditRecord, NewQuestion, Question};
pub use tag::Tag;
