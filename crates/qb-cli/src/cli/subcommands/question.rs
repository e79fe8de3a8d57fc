use clap::Subcommand;

/// Question commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuestionCommands {
    /// List questions through the filter and sort engine.
    List {
        /// Category or subcategory id ("all" for no restriction)
        #[arg(long)]
        category: Option<String>,
        /// Exact difficulty, 1-5 (0 for any)
        #[arg(long)]
        difficulty: Option<u8>,
        /// Case-insensitive match on title or tags
        #[arg(long)]
        search: Option<String>,
        /// Review window: any, today, week, month, quarter, year
        #[arg(long)]
        range: Option<String>,
        /// Mastery: any, mastered, not-mastered
        #[arg(long)]
        mastery: Option<String>,
        /// Sort field: title, difficulty, last-reviewed
        #[arg(long)]
        sort: Option<String>,
        /// Sort direction: asc, desc
        #[arg(long)]
        direction: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a question with its answer segments and related questions.
    Get { id: String },
    /// Create a question.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        sub_category: String,
        #[arg(long, default_value_t = 3)]
        difficulty: u8,
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long = "related")]
        related: Vec<String>,
    },
    /// Edit a question.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        sub_category: Option<String>,
        #[arg(long)]
        difficulty: Option<u8>,
        #[arg(long)]
        question: Option<String>,
        #[arg(long)]
        answer: Option<String>,
        /// Replaces the tag list
        #[arg(long = "tag", conflicts_with = "clear_tags")]
        tags: Vec<String>,
        /// Remove every tag
        #[arg(long)]
        clear_tags: bool,
        /// Replaces the related question ids
        #[arg(long = "related", conflicts_with = "clear_related")]
        related: Vec<String>,
        /// Remove every related question id
        #[arg(long)]
        clear_related: bool,
        /// Edit-history entry
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete a question.
    Delete { id: String },
    /// Toggle a question's mastered flag.
    Master { id: String },
}
