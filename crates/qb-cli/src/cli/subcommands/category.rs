use clap::Subcommand;

/// Category commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    /// List categories with their subcategories and question counts.
    List,
    /// Create a category.
    Create { name: String },
    /// Rename a category.
    Rename { id: String, name: String },
    /// Delete a category after deleting each of its subcategories.
    Delete { id: String },
}
