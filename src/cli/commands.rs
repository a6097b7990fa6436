use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wish", about = concat!("wishlist v", env!("CARGO_PKG_VERSION"), " - track wishes across open, purchased, and rejected"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Wishlist dump file to operate on
    #[arg(short = 'f', long = "file", global = true, default_value = "wishlist.json")]
    pub file: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter wishlist file
    Init(InitArgs),
    /// Show one list, or all three
    Show(ShowArgs),
    /// Move an item between lists
    Move(MoveArgs),
    /// Edit one field of an item
    Edit(EditArgs),
    /// Write a timestamped export of the wishlist
    Export(ExportArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// List to show: open, purchased, or rejected (default: all)
    pub list: Option<String>,
}

#[derive(Args)]
pub struct MoveArgs {
    /// List the item is currently in
    pub source: String,
    /// Position of the item in the source list (0-based)
    pub index: usize,
    /// List to move the item to
    pub destination: String,
    /// Reason of rejection, stored on the item
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// List the item is in
    pub list: String,
    /// Position of the item in the list (0-based)
    pub index: usize,
    /// Field to change (name, link, price, createTime, processTime, acceptNote, rejectNote)
    pub field: String,
    /// New value
    pub value: String,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Directory to write the export into (default: alongside the dump file)
    #[arg(long)]
    pub dir: Option<String>,
}
