//! `cadence` CLI — expand and inspect persisted recurrence rule payloads.
//!
//! ## Usage
//!
//! ```sh
//! # Expand a payload over a window (stdin → stdout, one ISO date per line)
//! echo '{"frequency":1,"period":0}' | cadence expand --from 2024-01-01 --to 2024-01-05
//!
//! # Expand from a payload file, with a secondary filter window
//! cadence expand -i rule.json --from 2024-01-01 --to 2024-03-31 \
//!     --filter-from 2024-02-01 --filter-to 2024-02-29
//!
//! # Expand with Sunday-start weeks
//! cadence expand --rule '{"frequency":2,"period":1,"weekdays":[1,7]}' \
//!     --from 2024-01-01 --to 2024-01-31 --week-start sunday
//!
//! # Audit a stored payload (normalized fields as pretty JSON)
//! echo '{"frequency":2,"period":1,"weekdays":[2,5]}' | cadence inspect
//! ```

use anyhow::{bail, Context, Result};
use cadence_core::{generate, CalendarConfig, DateWindow, Pattern, Period, RecurrenceRule};
use chrono::{NaiveDate, Weekday};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "cadence", version, about = "Recurrence rule expansion CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a rule payload into concrete dates within a window
    Expand {
        /// Rule payload as a JSON string (reads from stdin or -i if omitted)
        #[arg(long)]
        rule: Option<String>,
        /// Input file containing the rule payload
        #[arg(short, long, conflicts_with = "rule")]
        input: Option<String>,
        /// Window start, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// Window end, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,
        /// Filter window start, inclusive (YYYY-MM-DD)
        #[arg(long, requires = "filter_to")]
        filter_from: Option<NaiveDate>,
        /// Filter window end, inclusive (YYYY-MM-DD)
        #[arg(long, requires = "filter_from")]
        filter_to: Option<NaiveDate>,
        /// First day of the week (monday, tuesday, ... sunday)
        #[arg(long, default_value = "monday")]
        week_start: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode a rule payload and print its normalized fields as JSON
    Inspect {
        /// Rule payload as a JSON string (reads from stdin or -i if omitted)
        #[arg(long)]
        rule: Option<String>,
        /// Input file containing the rule payload
        #[arg(short, long, conflicts_with = "rule")]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Expand {
            rule,
            input,
            from,
            to,
            filter_from,
            filter_to,
            week_start,
            output,
        } => {
            let payload = read_payload(rule.as_deref(), input.as_deref())?;
            let rule = RecurrenceRule::try_decode(payload.trim())
                .context("Failed to decode rule payload")?;

            let window = DateWindow::new(from, to);
            let filter = match (filter_from, filter_to) {
                (Some(start), Some(end)) => Some(DateWindow::new(start, end)),
                _ => None,
            };
            let config = CalendarConfig {
                week_start: parse_week_start(&week_start)?,
            };

            let dates = generate(&rule, window, filter, &config);
            let mut lines = dates
                .iter()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .collect::<Vec<_>>()
                .join("\n");
            if !lines.is_empty() {
                lines.push('\n');
            }
            write_output(output.as_deref(), &lines)?;
        }
        Commands::Inspect { rule, input } => {
            let payload = read_payload(rule.as_deref(), input.as_deref())?;
            let rule = RecurrenceRule::try_decode(payload.trim())
                .context("Failed to decode rule payload")?;

            let period = match rule.period() {
                Period::Day => "day",
                Period::Week => "week",
                Period::Month => "month",
            };
            let mut summary = serde_json::json!({
                "frequency": rule.frequency(),
                "period": period,
            });
            match rule.pattern() {
                Pattern::Daily => {}
                Pattern::Weekly { .. } => {
                    summary["weekdays"] = rule
                        .weekdays()
                        .iter()
                        .map(|day| day.to_string())
                        .collect::<Vec<_>>()
                        .into();
                }
                Pattern::Monthly { .. } => {
                    if let Some(index) = rule.month_day() {
                        summary["index"] = index.into();
                    }
                }
            }
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

/// The rule payload comes from --rule, a file, or stdin, in that order.
fn read_payload(rule: Option<&str>, input: Option<&str>) -> Result<String> {
    match (rule, input) {
        (Some(payload), _) => Ok(payload.to_string()),
        (None, Some(path)) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        (None, None) => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn parse_week_start(value: &str) -> Result<Weekday> {
    match value.to_ascii_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Mon),
        "tuesday" | "tue" => Ok(Weekday::Tue),
        "wednesday" | "wed" => Ok(Weekday::Wed),
        "thursday" | "thu" => Ok(Weekday::Thu),
        "friday" | "fri" => Ok(Weekday::Fri),
        "saturday" | "sat" => Ok(Weekday::Sat),
        "sunday" | "sun" => Ok(Weekday::Sun),
        other => bail!("Unknown week start: '{}'. Use a weekday name like 'monday'.", other),
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
