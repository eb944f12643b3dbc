use crate::commands::{CmdMessage, CmdResult, DayRecord};
use crate::store::{EventStore, SaveStatus};

/// Turn a failed write-behind into a warning on the result. The mutation
/// already happened in memory; the session carries on either way.
pub fn push_save_warning(result: &mut CmdResult, status: SaveStatus) {
    if let SaveStatus::Failed(reason) = status {
        result.add_message(CmdMessage::warning(format!(
            "Could not write events file: {} (changes kept for this session)",
            reason
        )));
    }
}

/// All records in a (year, month), sorted by day.
pub fn month_records<S: EventStore>(store: &S, year: i32, month: u32) -> Vec<DayRecord> {
    let mut records: Vec<DayRecord> = store
        .entries()
        .into_iter()
        .filter(|(key, _)| key.in_month(year, month))
        .map(|(key, entry)| DayRecord { key, entry })
        .collect();
    records.sort_by_key(|record| record.key.day);
    records
}
