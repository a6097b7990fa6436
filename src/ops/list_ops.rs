use crate::model::item::{today_str, Item, ListName};
use crate::model::wishlist::{MoveRecord, Wishlist};

/// Error type for list operations
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("index {index} out of range for {list} (len {len})")]
    IndexOutOfRange {
        list: ListName,
        index: usize,
        len: usize,
    },
    #[error("no recorded move to undo")]
    EmptyHistory,
    #[error("recorded item is no longer in {list}")]
    ItemVanished { list: ListName },
    #[error("more than one item in {list} matches the recorded identity")]
    AmbiguousIdentity { list: ListName },
}

// ---------------------------------------------------------------------------
// Moves
// ---------------------------------------------------------------------------

/// Move the item at `index` in `source` to the front of `destination`.
///
/// Sets the item's state to the destination list, stamps or clears its
/// process date, and overwrites its reject note when a non-empty one is
/// supplied. Pushes exactly one history record storing how to reverse the
/// move. A self-move is legal and reinserts the item at the front of its
/// own list.
pub fn move_item(
    wishlist: &mut Wishlist,
    source: ListName,
    index: usize,
    destination: ListName,
    reject_note: Option<&str>,
) -> Result<(), ListError> {
    let len = wishlist.list(source).len();
    if index >= len {
        return Err(ListError::IndexOutOfRange {
            list: source,
            index,
            len,
        });
    }

    let mut item = wishlist.list_mut(source).remove(index);
    set_state(&mut item, destination);
    if let Some(note) = reject_note {
        if !note.is_empty() {
            item.reject_note = note.to_string();
        }
    }

    let record = MoveRecord {
        source: destination,
        destination: source,
        destination_index: index,
        item_key: item.key,
    };
    wishlist.list_mut(destination).insert(0, item);
    wishlist.history.push(record);
    Ok(())
}

/// Reverse the most recent move.
///
/// Locates the moved item by identity in the list the move put it in,
/// returns it to the list it came from, and pops the history record. The
/// recorded insertion index is clamped to the destination's current length
/// in case intervening moves shrank the list. Field changes made by the
/// original move (the reject note) are not reverted. On any error the
/// history and all lists are left unchanged.
pub fn undo_last_move(wishlist: &mut Wishlist) -> Result<(), ListError> {
    let record = *wishlist.history.last().ok_or(ListError::EmptyHistory)?;

    let mut matching = wishlist
        .list(record.source)
        .iter()
        .enumerate()
        .filter(|(_, item)| item.key == record.item_key)
        .map(|(position, _)| position);
    let position = matching.next().ok_or(ListError::ItemVanished {
        list: record.source,
    })?;
    if matching.next().is_some() {
        return Err(ListError::AmbiguousIdentity {
            list: record.source,
        });
    }

    let mut item = wishlist.list_mut(record.source).remove(position);
    set_state(&mut item, record.destination);
    let destination = wishlist.list_mut(record.destination);
    let at = record.destination_index.min(destination.len());
    destination.insert(at, item);
    wishlist.history.pop();
    Ok(())
}

/// Direct state set; keeps the process date in sync.
fn set_state(item: &mut Item, state: ListName) {
    if item.state == state {
        return;
    }
    item.state = state;
    if state == ListName::Open {
        item.process_time.clear();
    } else {
        item.process_time = today_str();
    }
}

// ---------------------------------------------------------------------------
// Field edits
// ---------------------------------------------------------------------------

/// A single-field edit applied to an item in place.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Name(String),
    Link(String),
    Price(f64),
    CreateTime(String),
    ProcessTime(String),
    AcceptNote(String),
    RejectNote(String),
}

/// Replace one field of the item at `(list, index)`, leaving every other
/// item and every other field untouched. Does not record history.
pub fn edit_field(
    wishlist: &mut Wishlist,
    list: ListName,
    index: usize,
    edit: FieldEdit,
) -> Result<(), ListError> {
    let items = wishlist.list_mut(list);
    let len = items.len();
    let item = items
        .get_mut(index)
        .ok_or(ListError::IndexOutOfRange { list, index, len })?;

    match edit {
        FieldEdit::Name(name) => item.name = name,
        FieldEdit::Link(link) => item.link = link,
        FieldEdit::Price(price) => {
            item.price = if price.is_finite() && price >= 0.0 {
                price
            } else {
                0.0
            };
        }
        FieldEdit::CreateTime(time) => item.create_time = time,
        FieldEdit::ProcessTime(time) => item.process_time = time,
        FieldEdit::AcceptNote(note) => item.accept_note = note,
        FieldEdit::RejectNote(note) => item.reject_note = note,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_items(names: &[&str]) -> Vec<Item> {
        names.iter().map(|name| Item::new((*name).to_string())).collect()
    }

    #[test]
    fn move_stamps_process_date_and_undo_clears_it() {
        let mut wishlist = Wishlist::new();
        wishlist.open = open_items(&["Tent"]);

        move_item(&mut wishlist, ListName::Open, 0, ListName::Purchased, None).unwrap();
        assert_eq!(wishlist.purchased[0].process_time, today_str());

        undo_last_move(&mut wishlist).unwrap();
        assert!(wishlist.open[0].process_time.is_empty());
    }

    #[test]
    fn move_out_of_range_is_an_error() {
        let mut wishlist = Wishlist::new();
        wishlist.open = open_items(&["Tent"]);

        let err = move_item(&mut wishlist, ListName::Open, 1, ListName::Purchased, None);
        assert!(matches!(
            err,
            Err(ListError::IndexOutOfRange { index: 1, len: 1, .. })
        ));
        assert_eq!(wishlist.open.len(), 1);
        assert!(wishlist.history.is_empty());
    }

    #[test]
    fn empty_reject_note_leaves_existing_note() {
        let mut wishlist = Wishlist::new();
        wishlist.open = open_items(&["Tent"]);
        wishlist.open[0].reject_note = "kept from before".to_string();

        move_item(&mut wishlist, ListName::Open, 0, ListName::Rejected, Some("")).unwrap();
        assert_eq!(wishlist.rejected[0].reject_note, "kept from before");
    }

    #[test]
    fn edit_price_coerces_negative_to_zero() {
        let mut wishlist = Wishlist::new();
        wishlist.open = open_items(&["Tent"]);

        edit_field(&mut wishlist, ListName::Open, 0, FieldEdit::Price(-3.0)).unwrap();
        assert_eq!(wishlist.open[0].price, 0.0);

        edit_field(&mut wishlist, ListName::Open, 0, FieldEdit::Price(129.5)).unwrap();
        assert_eq!(wishlist.open[0].price, 129.5);
    }

    #[test]
    fn edit_out_of_range_is_an_error() {
        let mut wishlist = Wishlist::new();
        let err = edit_field(
            &mut wishlist,
            ListName::Open,
            0,
            FieldEdit::Name("x".to_string()),
        );
        assert!(matches!(err, Err(ListError::IndexOutOfRange { .. })));
    }
}
