use super::item::{Item, ItemKey, ListName};

/// The stored instruction sufficient to reverse exactly one move.
///
/// Recorded from the perspective of the reverse operation: undo removes the
/// item from `source` and reinserts it into `destination` at
/// `destination_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub source: ListName,
    pub destination: ListName,
    pub destination_index: usize,
    pub item_key: ItemKey,
}

/// The single source of truth for list membership and ordering: the three
/// named item lists plus the move-history stack.
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    pub open: Vec<Item>,
    pub purchased: Vec<Item>,
    pub rejected: Vec<Item>,
    /// Undo stack. Append-only except pop-on-undo; no redo.
    pub history: Vec<MoveRecord>,
}

impl Wishlist {
    pub fn new() -> Wishlist {
        Wishlist::default()
    }

    pub fn list(&self, name: ListName) -> &[Item] {
        match name {
            ListName::Open => &self.open,
            ListName::Purchased => &self.purchased,
            ListName::Rejected => &self.rejected,
        }
    }

    pub fn list_mut(&mut self, name: ListName) -> &mut Vec<Item> {
        match name {
            ListName::Open => &mut self.open,
            ListName::Purchased => &mut self.purchased,
            ListName::Rejected => &mut self.rejected,
        }
    }

    /// Total item count across all three lists.
    pub fn total_items(&self) -> usize {
        self.open.len() + self.purchased.len() + self.rejected.len()
    }

    /// Wholesale-overwrite one list with already-normalized items.
    /// Touches neither the history nor the other lists.
    pub fn replace_list(&mut self, name: ListName, items: Vec<Item>) {
        *self.list_mut(name) = items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_list_leaves_other_lists_and_history_alone() {
        let mut wishlist = Wishlist::new();
        wishlist.purchased = vec![Item::new("Kettle".to_string())];
        wishlist.history.push(MoveRecord {
            source: ListName::Purchased,
            destination: ListName::Open,
            destination_index: 0,
            item_key: wishlist.purchased[0].key,
        });

        wishlist.replace_list(ListName::Open, vec![Item::new("Lamp".to_string())]);

        assert_eq!(wishlist.open.len(), 1);
        assert_eq!(wishlist.purchased.len(), 1);
        assert_eq!(wishlist.history.len(), 1);
    }

    #[test]
    fn total_items_sums_all_lists() {
        let mut wishlist = Wishlist::new();
        wishlist.open = vec![Item::new("A".to_string()), Item::new("B".to_string())];
        wishlist.rejected = vec![Item::new("C".to_string())];
        assert_eq!(wishlist.total_items(), 3);
    }
}
