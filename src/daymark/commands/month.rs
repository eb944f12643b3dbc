use crate::calendar;
use crate::commands::CmdResult;
use crate::error::{DaymarkError, Result};
use crate::store::EventStore;

use super::helpers::month_records;

pub fn run<S: EventStore>(store: &S, year: i32, month: u32) -> Result<CmdResult> {
    if calendar::month_name(month).is_none() {
        return Err(DaymarkError::Api(format!("Invalid month: {}", month)));
    }

    Ok(CmdResult::default().with_listed(month_records(store, year, month)))
}
