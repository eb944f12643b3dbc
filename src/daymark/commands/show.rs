use crate::commands::{CmdMessage, CmdResult, DayRecord};
use crate::error::Result;
use crate::model::DateKey;
use crate::store::EventStore;

pub fn run<S: EventStore>(store: &S, key: DateKey) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.get(&key) {
        Some(entry) => {
            result.listed.push(DayRecord { key, entry });
        }
        None => {
            result.add_message(CmdMessage::info(format!("No entry for {}", key)));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_the_entry() {
        let fixture = StoreFixture::new().with_noted_entry(2024, 3, 7, "Turtle", "half off");
        let result = run(&fixture.store, DateKey::new(2024, 3, 7)).unwrap();

        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].entry.choice, "Turtle");
        assert_eq!(result.listed[0].entry.note, "half off");
    }

    #[test]
    fn absent_day_yields_notice() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store, DateKey::new(2024, 3, 7)).unwrap();

        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
