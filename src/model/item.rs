use chrono::Local;
use serde::{Deserialize, Serialize};

/// One of the three wishlist lists. Doubles as an item's processing state,
/// which always equals the name of the list holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListName {
    Open,
    Purchased,
    Rejected,
}

impl ListName {
    /// All lists in dump-file order.
    pub const ALL: [ListName; 3] = [ListName::Open, ListName::Purchased, ListName::Rejected];

    /// The key used for this list in dump files.
    pub fn as_str(self) -> &'static str {
        match self {
            ListName::Open => "open",
            ListName::Purchased => "purchased",
            ListName::Rejected => "rejected",
        }
    }

    /// Parse a list name as it appears in dump files and CLI arguments.
    pub fn from_name(s: &str) -> Option<ListName> {
        match s {
            "open" => Some(ListName::Open),
            "purchased" => Some(ListName::Purchased),
            "rejected" => Some(ListName::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for ListName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session-local identity token for an item.
///
/// Tracks one item across in-memory moves so undo can find it again.
/// Collisions only need to be unlikely within a single session. Never
/// serialized; re-importing a dump assigns fresh keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemKey(u64);

impl ItemKey {
    /// Derive a new key from an item name and a fresh random salt.
    pub fn derive(name: &str) -> ItemKey {
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in name.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        ItemKey(hash ^ rand::random::<u64>())
    }
}

/// A single wishlist entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Which list holds this item.
    pub state: ListName,
    pub name: String,
    pub link: String,
    /// Non-negative; normalization and edits coerce bad input to 0.
    pub price: f64,
    /// Date the wish was recorded (`%Y-%m-%d`).
    pub create_time: String,
    /// Date the item was purchased or rejected; empty while open.
    pub process_time: String,
    pub accept_note: String,
    /// Reason the item was rejected, attached on the rejecting move.
    pub reject_note: String,
    /// Session-local identity; never written to dump files.
    #[serde(skip)]
    pub key: ItemKey,
}

impl Item {
    /// Create an item with default field values and a fresh key.
    pub fn new(name: String) -> Item {
        let key = ItemKey::derive(&name);
        Item {
            state: ListName::Open,
            name,
            link: String::new(),
            price: 0.0,
            create_time: today_str(),
            process_time: String::new(),
            accept_note: String::new(),
            reject_note: String::new(),
            key,
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.name == other.name
            && self.link == other.link
            && self.price == other.price
            && self.create_time == other.create_time
            && self.process_time == other.process_time
            && self.accept_note == other.accept_note
            && self.reject_note == other.reject_note
    }
}

/// Today's local date in the dump date format.
pub fn today_str() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
