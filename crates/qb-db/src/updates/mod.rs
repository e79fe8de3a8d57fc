//! Update builder types for record mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some` fields
//! generate SET clauses in the dynamic UPDATE SQL. `Option<Option<T>>` fields
//! distinguish "leave alone" from "clear".

pub mod job;
pub mod question;
