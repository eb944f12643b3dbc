use chrono::Datelike;
use clap::Parser;
use colored::*;
use daymark::api::{CmdMessage, DayRecord, DaymarkApi, MessageLevel};
use daymark::calendar;
use daymark::config::DaymarkConfig;
use daymark::error::{DaymarkError, Result};
use daymark::model::DateKey;
use daymark::store::fs::FileStore;
use daymark::store::LoadOutcome;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

const EVENTS_FILENAME: &str = "events.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: DaymarkApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Show { month, year }) => handle_show(&ctx, month, year),
        Some(Commands::Set { date, choice, note }) => handle_set(&mut ctx, date, choice, note),
        Some(Commands::Get { date }) => handle_get(&ctx, date),
        Some(Commands::Unset { date }) => handle_unset(&mut ctx, date),
        Some(Commands::Clear { month, year, yes }) => handle_clear(&mut ctx, month, year, yes),
        Some(Commands::Choices) => handle_choices(&ctx),
        None => handle_show(&ctx, None, None),
    }
}

fn init_context() -> Result<AppContext> {
    // The data and config files live in the run directory; no flag or
    // environment variable moves them.
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let (store, outcome) = FileStore::open(cwd.join(EVENTS_FILENAME));
    if let LoadOutcome::Discarded(reason) = outcome {
        eprintln!(
            "{}",
            format!("Warning: ignoring unreadable events file: {}", reason).yellow()
        );
    }

    let config = DaymarkConfig::load(&cwd).unwrap_or_default();
    let api = DaymarkApi::new(store, config);

    Ok(AppContext { api })
}

fn handle_show(ctx: &AppContext, month: Option<String>, year: Option<i32>) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let month = match month {
        Some(raw) => parse_month_arg(&raw)?,
        None => today.month(),
    };
    let year = year.unwrap_or_else(|| today.year());

    let result = ctx.api.month(year, month)?;
    print_month_grid(year, month, &result.listed)?;
    print_month_listing(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_set(ctx: &mut AppContext, date: String, choice: String, note: String) -> Result<()> {
    let key = parse_date_arg(&date)?;
    let result = ctx.api.assign(key, choice, note)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(ctx: &AppContext, date: String) -> Result<()> {
    let key = parse_date_arg(&date)?;
    let result = ctx.api.day(key)?;
    for record in &result.listed {
        print_full_record(record);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_unset(ctx: &mut AppContext, date: String) -> Result<()> {
    let key = parse_date_arg(&date)?;
    let result = ctx.api.unassign(key)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, month: String, year: i32, yes: bool) -> Result<()> {
    let month = parse_month_arg(&month)?;
    let result = ctx.api.clear_month(year, month, yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_choices(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.choices()?;
    for choice in &result.choices {
        println!("{}", choice);
    }
    print_messages(&result.messages);
    Ok(())
}

fn parse_date_arg(raw: &str) -> Result<DateKey> {
    raw.parse()
        .map_err(|_| DaymarkError::Api(format!("Invalid date (expected Y-M-D): {}", raw)))
}

fn parse_month_arg(raw: &str) -> Result<u32> {
    calendar::parse_month(raw)
        .ok_or_else(|| DaymarkError::Api(format!("Invalid month: {}", raw)))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_full_record(record: &DayRecord) {
    println!(
        "{} {}",
        record.key.to_string().yellow(),
        record.entry.choice.bold()
    );
    if !record.entry.note.is_empty() {
        println!("{}", record.entry.note);
    }
}

const CELL_WIDTH: usize = 5;
const LISTING_WIDTH: usize = 72;

fn print_month_grid(year: i32, month: u32, records: &[DayRecord]) -> Result<()> {
    let month_label = calendar::month_name(month)
        .ok_or_else(|| DaymarkError::Api(format!("Invalid month: {}", month)))?;
    let weeks = calendar::month_weeks(year, month)
        .ok_or_else(|| DaymarkError::Api(format!("Invalid date: {}-{}", year, month)))?;

    println!("{}", format!("{} {}", month_label, year).bold());
    println!();

    let header: String = calendar::WEEKDAY_ABBR
        .iter()
        .map(|abbr| format!("{:>width$}", abbr, width = CELL_WIDTH))
        .collect();
    println!("{}", header.bold());

    for week in weeks {
        let mut line = String::new();
        for day in week {
            if day == 0 {
                line.push_str(&" ".repeat(CELL_WIDTH));
                continue;
            }
            let has_entry = records.iter().any(|r| r.key.day == day);
            if has_entry {
                // Pad before coloring so ANSI codes don't skew the layout
                let cell = format!("{}*", day);
                line.push_str(&" ".repeat(CELL_WIDTH - cell.len()));
                line.push_str(&cell.cyan().bold().to_string());
            } else {
                line.push_str(&format!("{:>width$}", day, width = CELL_WIDTH));
            }
        }
        println!("{}", line);
    }
    println!();
    Ok(())
}

fn print_month_listing(records: &[DayRecord]) {
    for record in records {
        let day_label = format!("{:>3}.", record.key.day);
        let text = if record.entry.note.is_empty() {
            record.entry.choice.clone()
        } else {
            format!("{} — {}", record.entry.choice, flatten_note(&record.entry.note))
        };
        let available = LISTING_WIDTH.saturating_sub(day_label.width() + 1);
        println!(
            "{} {}",
            day_label.cyan(),
            truncate_to_width(&text, available)
        );
    }
}

fn flatten_note(note: &str) -> String {
    note.chars().map(|c| if c == '\n' { ' ' } else { c }).collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
