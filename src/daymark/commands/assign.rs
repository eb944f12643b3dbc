use crate::commands::{CmdMessage, CmdResult, DayRecord};
use crate::error::Result;
use crate::model::{DateKey, DayEntry};
use crate::store::EventStore;

use super::helpers::push_save_warning;

pub fn run<S: EventStore>(
    store: &mut S,
    key: DateKey,
    choice: String,
    note: String,
) -> Result<CmdResult> {
    let entry = DayEntry::new(choice, note);
    let status = store.set(key, entry.clone());

    let mut result = CmdResult::default();
    let label = if entry.choice.is_empty() {
        "(no choice)"
    } else {
        entry.choice.as_str()
    };
    result.add_message(CmdMessage::success(format!("Assigned {}: {}", key, label)));
    push_save_warning(&mut result, status);
    result.affected.push(DayRecord { key, entry });

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn stores_the_entry() {
        let mut store = InMemoryStore::new();
        let key = DateKey::new(2024, 3, 7);
        run(&mut store, key, "Turtle".into(), "half price".into()).unwrap();

        assert_eq!(store.get(&key), Some(DayEntry::new("Turtle", "half price")));
    }

    #[test]
    fn second_assign_overwrites() {
        let mut store = InMemoryStore::new();
        let key = DateKey::new(2024, 3, 7);
        run(&mut store, key, "A".into(), "first".into()).unwrap();
        run(&mut store, key, "B".into(), "second".into()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&key), Some(DayEntry::new("B", "second")));
    }

    #[test]
    fn accepts_calendar_invalid_dates() {
        // The store trusts the caller on date validity
        let mut store = InMemoryStore::new();
        let key = DateKey::new(2023, 2, 30);
        run(&mut store, key, "X".into(), "".into()).unwrap();
        assert_eq!(store.get(&key), Some(DayEntry::new("X", "")));
    }

    #[test]
    fn blank_entry_is_stored() {
        let mut store = InMemoryStore::new();
        let key = DateKey::new(2024, 3, 7);
        run(&mut store, key, "".into(), "".into()).unwrap();
        assert!(store.get(&key).unwrap().is_blank());
    }
}
