use crate::calendar;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DaymarkError, Result};
use crate::store::EventStore;
use std::io::{self, Write};

use super::helpers::{month_records, push_save_warning};

pub fn run<S: EventStore>(
    store: &mut S,
    year: i32,
    month: u32,
    skip_confirm: bool,
) -> Result<CmdResult> {
    let month_label = calendar::month_name(month)
        .ok_or_else(|| DaymarkError::Api(format!("Invalid month: {}", month)))?;

    // 1. Resolve targets
    let targets = month_records(store, year, month);
    if targets.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info(format!(
            "No entries for {} {}.",
            month_label, year
        )));
        return Ok(res);
    }

    // 2. Confirm
    if !skip_confirm {
        println!("This will erase all entries for {} {}:", month_label, year);
        for record in &targets {
            println!("  {} {}", record.key, record.entry.choice);
        }
        print!("[Y] To erase: ");
        io::stdout().flush().map_err(DaymarkError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(DaymarkError::Io)?;

        if input.trim() != "Y" {
            let mut res = CmdResult::default();
            res.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(res);
        }
    }

    // 3. Erase
    let (removed, status) = store.remove_where(|key| key.in_month(year, month));

    let mut result = CmdResult::default().with_affected(targets);
    result.add_message(CmdMessage::success(format!(
        "Cleared {} entries for {} {}.",
        removed, month_label, year
    )));
    push_save_warning(&mut result, status);

    Ok(result)
}
