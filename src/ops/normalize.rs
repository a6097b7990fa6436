use serde_json::Value;

use crate::model::item::{Item, ListName};

/// Best-effort repair pass over one uploaded list.
///
/// Records with neither a non-empty `name` nor a non-empty `acceptNote` are
/// dropped (sparse JSON array slots arrive as null or empty objects). Every
/// surviving record is rebuilt over `Item::new` defaults: a field present
/// with the right type wins, a missing or mistyped field falls back. Input
/// order is preserved and no error is ever raised.
pub fn normalize(raw: &[Value]) -> Vec<Item> {
    raw.iter().filter_map(normalize_item).collect()
}

fn normalize_item(raw: &Value) -> Option<Item> {
    let name = text(raw, "name").unwrap_or_default();
    let accept_note = text(raw, "acceptNote").unwrap_or_default();
    if name.is_empty() && accept_note.is_empty() {
        return None;
    }

    let mut item = Item::new(name);
    item.accept_note = accept_note;
    if let Some(link) = text(raw, "link") {
        item.link = link;
    }
    if let Some(time) = text(raw, "createTime") {
        item.create_time = time;
    }
    if let Some(time) = text(raw, "processTime") {
        item.process_time = time;
    }
    if let Some(note) = text(raw, "rejectNote") {
        item.reject_note = note;
    }
    if let Some(state) = text(raw, "state").as_deref().and_then(ListName::from_name) {
        item.state = state;
    }
    if let Some(price) = raw.get("price").and_then(Value::as_f64) {
        if price >= 0.0 {
            item.price = price;
        }
    }
    Some(item)
}

/// The value of a string field, or None when it is missing or not a string.
fn text(raw: &Value, field: &str) -> Option<String> {
    raw.get(field).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::item::today_str;

    #[test]
    fn negative_price_coerces_to_zero() {
        let clean = normalize(&[json!({"name": "Chair", "price": -5})]);
        assert_eq!(clean[0].price, 0.0);
    }

    #[test]
    fn non_numeric_price_coerces_to_zero() {
        let clean = normalize(&[json!({"name": "Chair", "price": "120"})]);
        assert_eq!(clean[0].price, 0.0);
    }

    #[test]
    fn invalid_state_forces_open() {
        let clean = normalize(&[json!({"name": "Chair", "state": "bogus"})]);
        assert_eq!(clean[0].state, ListName::Open);
    }

    #[test]
    fn valid_state_is_kept() {
        let clean = normalize(&[json!({"name": "Chair", "state": "rejected"})]);
        assert_eq!(clean[0].state, ListName::Rejected);
    }

    #[test]
    fn empty_records_are_dropped_preserving_order() {
        let clean = normalize(&[
            json!({"name": "First"}),
            json!(null),
            json!({}),
            json!({"link": "https://example.com"}),
            json!({"name": "Last"}),
        ]);
        let names: Vec<&str> = clean.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["First", "Last"]);
    }

    #[test]
    fn record_with_only_accept_note_survives() {
        let clean = normalize(&[json!({"acceptNote": "still deciding on the model"})]);
        assert_eq!(clean.len(), 1);
        assert!(clean[0].name.is_empty());
        assert_eq!(clean[0].accept_note, "still deciding on the model");
    }

    #[test]
    fn missing_fields_get_defaults() {
        let clean = normalize(&[json!({"name": "Chair"})]);
        let item = &clean[0];
        assert_eq!(item.state, ListName::Open);
        assert_eq!(item.price, 0.0);
        assert_eq!(item.create_time, today_str());
        assert!(item.link.is_empty());
        assert!(item.process_time.is_empty());
        assert!(item.reject_note.is_empty());
    }

    #[test]
    fn present_but_empty_create_time_is_kept() {
        let clean = normalize(&[json!({"name": "Chair", "createTime": ""})]);
        assert_eq!(clean[0].create_time, "");
    }

    #[test]
    fn mistyped_fields_fall_back_to_defaults() {
        let clean = normalize(&[json!({
            "name": "Chair",
            "link": 42,
            "state": 1,
            "rejectNote": ["not", "a", "string"]
        })]);
        let item = &clean[0];
        assert!(item.link.is_empty());
        assert_eq!(item.state, ListName::Open);
        assert!(item.reject_note.is_empty());
    }

    #[test]
    fn each_pass_assigns_fresh_keys() {
        let raw = [json!({"name": "Chair"})];
        let first = normalize(&raw);
        let second = normalize(&raw);
        assert_ne!(first[0].key, second[0].key);
    }
}
