use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::DateKey;
use crate::store::EventStore;

use super::helpers::push_save_warning;

pub fn run<S: EventStore>(store: &mut S, key: DateKey) -> Result<CmdResult> {
    let (existed, status) = store.remove(&key);

    let mut result = CmdResult::default();
    if existed {
        result.add_message(CmdMessage::success(format!("Removed entry for {}", key)));
        push_save_warning(&mut result, status);
    } else {
        result.add_message(CmdMessage::info(format!("No entry for {}", key)));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_existing_entry() {
        let fixture = StoreFixture::new().with_entry(2024, 3, 7, "Turtle");
        let mut store = fixture.store;

        run(&mut store, DateKey::new(2024, 3, 7)).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn missing_entry_is_not_an_error() {
        let mut store = StoreFixture::new().store;
        let result = run(&mut store, DateKey::new(2024, 3, 7)).unwrap();
        assert!(result.messages[0].content.contains("No entry"));
    }
}
