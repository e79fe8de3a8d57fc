use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    CategoryCommands, JobCommands, QuestionCommands, StudyCommands, SubcategoryCommands,
    TagCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Interview questions.
    Question {
        #[command(subcommand)]
        action: QuestionCommands,
    },
    /// Question categories.
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Subcategories under a category.
    Subcategory {
        #[command(subcommand)]
        action: SubcategoryCommands,
    },
    /// Tags.
    Tag {
        #[command(subcommand)]
        action: TagCommands,
    },
    /// Job applications.
    Job {
        #[command(subcommand)]
        action: JobCommands,
    },
    /// Dashboard statistics.
    Stats(StatsArgs),
    /// Study sessions.
    Study {
        #[command(subcommand)]
        action: StudyCommands,
    },
    /// Import a JSON seed file.
    Seed(SeedArgs),
}

#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    /// Days counted as "recent" (defaults to `general.recent_window_days`)
    #[arg(long)]
    pub window_days: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// Seed file with categories, subcategories, tags, questions, and jobs
    pub file: PathBuf,
}
