use serde::Serialize;

use crate::model::item::{Item, ListName};
use crate::model::wishlist::Wishlist;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ListJson<'a> {
    pub list: ListName,
    pub items: &'a [Item],
}

/// Print the given lists as JSON.
pub fn print_lists_json(wishlist: &Wishlist, lists: &[ListName]) -> Result<(), serde_json::Error> {
    let out: Vec<ListJson> = lists
        .iter()
        .map(|&name| ListJson {
            list: name,
            items: wishlist.list(name),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Human output
// ---------------------------------------------------------------------------

/// Print the given lists in human-readable form.
pub fn print_lists(wishlist: &Wishlist, lists: &[ListName]) {
    for (position, &name) in lists.iter().enumerate() {
        if position > 0 {
            println!();
        }
        let items = wishlist.list(name);
        println!("{} ({})", name, items.len());
        for (index, item) in items.iter().enumerate() {
            println!("  [{}] {}", index, format_item(item));
        }
    }
}

/// One-line summary of an item.
pub fn format_item(item: &Item) -> String {
    let mut line = item.name.clone();
    if item.price > 0.0 {
        line.push_str(&format!(" ({})", item.price));
    }
    if !item.reject_note.is_empty() {
        line.push_str(&format!(" [{}]", item.reject_note));
    }
    line
}
