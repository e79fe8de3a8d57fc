use clap::Subcommand;

/// Tag commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TagCommands {
    /// List tags.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
}
