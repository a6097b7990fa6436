use std::path::Path;

use crate::cli::commands::InitArgs;
use crate::io::dump_io;
use crate::model::item::{today_str, Item, ListName};
use crate::model::wishlist::Wishlist;

/// Create a starter wishlist file with a few sample items.
pub fn cmd_init(file: &Path, args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    if file.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            file.display()
        )
        .into());
    }

    let wishlist = starter_wishlist();
    dump_io::write_dump(file, &wishlist)?;
    println!("created {}", file.display());
    Ok(())
}

fn starter_wishlist() -> Wishlist {
    let mut desk = Item::new("Standing desk".to_string());
    desk.link = "https://example.com/desk".to_string();
    desk.price = 450.0;
    desk.accept_note = "The old desk is too low.".to_string();

    let mut headphones = Item::new("Noise-cancelling headphones".to_string());
    headphones.price = 280.0;
    headphones.accept_note = "For the open-plan office.".to_string();

    let mut keyboard = Item::new("Mechanical keyboard".to_string());
    keyboard.state = ListName::Purchased;
    keyboard.price = 120.0;
    keyboard.accept_note = "Typing all day anyway.".to_string();
    keyboard.process_time = today_str();

    let mut monitor = Item::new("Second 4k monitor".to_string());
    monitor.state = ListName::Rejected;
    monitor.price = 600.0;
    monitor.accept_note = "More screen space.".to_string();
    monitor.reject_note = "No room on the desk.".to_string();
    monitor.process_time = today_str();

    let mut wishlist = Wishlist::new();
    wishlist.open = vec![desk, headphones];
    wishlist.purchased = vec![keyboard];
    wishlist.rejected = vec![monitor];
    wishlist
}
