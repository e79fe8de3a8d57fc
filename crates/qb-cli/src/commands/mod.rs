pub mod category;
pub mod dispatch;
pub mod job;
pub mod question;
pub mod seed;
pub mod shared;
pub mod stats;
pub mod study;
pub mod subcategory;
pub mod tag;
