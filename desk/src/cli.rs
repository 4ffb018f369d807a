use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "item-desk")]
#[command(about = "Browse and edit items served by the item REST API")]
#[command(version)]
pub struct Cli {
    /// API base URL, e.g. http://localhost:5000/api/ (overrides ITEM_API_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides ITEM_HTTP_TIMEOUT_SECONDS)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive form (default)
    Shell,

    /// Show every item
    List,

    /// Add a new item
    Add {
        /// Item name
        #[arg(short, long)]
        name: String,

        /// Item description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Replace an existing item
    Update {
        /// Id of the item to replace
        id: i64,

        /// New name
        #[arg(short, long)]
        name: String,

        /// New description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Delete an item
    Delete {
        /// Id of the item to delete
        id: i64,
    },
}
