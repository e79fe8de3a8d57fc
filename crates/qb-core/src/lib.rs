//! # qb-core
//!
//! Core types, ID prefixes, and error types for qbank.
//!
//! This crate provides the foundational types shared across all qbank crates:
//! - Entity structs for questions, the category taxonomy, tags, and job applications
//! - Status, filter, and sort enums
//! - ID prefix constants
//! - Cross-cutting error types
//! - Answer segmentation into text and fenced code parts
//! - Name resolution with fallback to raw identifiers
//! - CLI response types

pub mod answer;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod names;
pub mod responses;
