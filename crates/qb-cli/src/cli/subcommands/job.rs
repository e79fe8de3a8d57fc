use clap::Subcommand;

/// Job application commands.
#[derive(Clone, Debug, Subcommand)]
pub enum JobCommands {
    /// List applications split into active and archived.
    List {
        /// Sort key: date, company, status
        #[arg(long)]
        sort: Option<String>,
        /// Sort direction: asc, desc
        #[arg(long)]
        direction: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Get an application by ID.
    Get { id: String },
    /// Record an application.
    Create {
        #[arg(long)]
        company: String,
        #[arg(long)]
        position: String,
        #[arg(long)]
        location: Option<String>,
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        applied: Option<String>,
        #[arg(long, default_value = "applied")]
        status: String,
        /// YYYY-MM-DD, required when status is interview
        #[arg(long)]
        interview_date: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Edit an application. An empty value clears an optional field.
    Update {
        id: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        applied: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        interview_date: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Move an application to another pipeline stage.
    Status { id: String, status: String },
    /// Delete an application.
    Delete { id: String },
}
