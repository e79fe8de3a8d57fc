mod category;
mod job;
mod question;
mod study;
mod subcategory;
mod tag;

pub use category::CategoryCommands;
pub use job::JobCommands;
pub use question::QuestionCommands;
pub use study::StudyCommands;
pub use subcategory::SubcategoryCommands;
pub use tag::TagCommands;
