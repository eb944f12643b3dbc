use crate::commands::CmdResult;
use crate::config::DaymarkConfig;
use crate::error::Result;

pub fn run(config: &DaymarkConfig) -> Result<CmdResult> {
    Ok(CmdResult::default().with_choices(config.choices.clone()))
}
