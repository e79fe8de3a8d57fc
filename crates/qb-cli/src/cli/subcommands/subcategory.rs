use clap::Subcommand;

/// Subcategory commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SubcategoryCommands {
    /// Create a subcategory under a category.
    Create {
        name: String,
        #[arg(long)]
        category: String,
    },
    /// Rename a subcategory.
    Rename { id: String, name: String },
    /// Delete a subcategory.
    Delete { id: String },
}
