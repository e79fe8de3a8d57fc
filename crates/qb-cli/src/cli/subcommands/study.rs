use clap::Subcommand;

/// Study commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudyCommands {
    /// Run an interactive quiz over stdin.
    Quiz {
        /// Category or subcategory id
        #[arg(long)]
        category: Option<String>,
        /// Mastery: any, mastered, not-mastered
        #[arg(long, default_value = "not-mastered")]
        mastery: String,
        #[arg(long)]
        difficulty: Option<u8>,
        #[arg(long)]
        limit: Option<u32>,
        /// Mark questions answered as known as mastered
        #[arg(long)]
        record: bool,
    },
}
