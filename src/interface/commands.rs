use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::error::{Result, TrackerError};
use crate::interface::forms::{parse_entry_form, parse_limit};
use crate::interface::render::{format_entry_list, render, OutputFormat};
use crate::models::{EntryId, EntryKind};
use crate::state::Ledger;

/// One line of a batch script.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchCommand {
    Add {
        kind: EntryKind,
        name: String,
        calories: f64,
    },
    Remove {
        kind: EntryKind,
        id: EntryId,
    },
    Limit(f64),
    Reset,
    Filter {
        kind: EntryKind,
        text: String,
    },
    Show,
}

impl BatchCommand {
    /// Parse one script line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();
        let rest: Vec<&str> = words.collect();

        let command = match verb.as_str() {
            "meal" | "workout" => {
                let kind = parse_kind(&verb)?;
                let (calories, name) = rest.split_first().ok_or_else(|| {
                    TrackerError::Validation("Please fill in all fields.".to_string())
                })?;
                let form = parse_entry_form(&name.join(" "), calories)?;
                BatchCommand::Add {
                    kind,
                    name: form.name,
                    calories: form.calories,
                }
            }
            "remove" => match rest.as_slice() {
                [kind, id] => BatchCommand::Remove {
                    kind: parse_kind(kind)?,
                    id: EntryId::from(*id),
                },
                _ => return Err(usage(line, "remove meal|workout <id>")),
            },
            "limit" => BatchCommand::Limit(parse_limit(&rest.join(" "))?),
            "reset" => BatchCommand::Reset,
            "filter" => match rest.split_first() {
                Some((kind, text)) => BatchCommand::Filter {
                    kind: parse_kind(kind)?,
                    text: text.join(" "),
                },
                None => return Err(usage(line, "filter meal|workout [text]")),
            },
            "show" => BatchCommand::Show,
            _ => return Err(TrackerError::UnknownCommand(line.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_kind(label: &str) -> Result<EntryKind> {
    EntryKind::from_label(label).ok_or_else(|| {
        TrackerError::Validation(format!("Expected meal or workout, got '{}'", label))
    })
}

fn usage(line: &str, expected: &str) -> TrackerError {
    TrackerError::UnknownCommand(format!("{} (usage: {})", line, expected))
}

/// Counts of processed script lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub applied: usize,
    pub failed: usize,
}

/// Apply a single command, writing any feedback to `out`.
pub fn apply<W: Write>(
    ledger: &mut Ledger,
    command: BatchCommand,
    out: &mut W,
    format: OutputFormat,
) -> Result<()> {
    match command {
        BatchCommand::Add {
            kind,
            name,
            calories,
        } => {
            let entry = ledger.add_entry(kind, name, calories)?;
            writeln!(
                out,
                "Added {} {} ({:.0} cal) as {}",
                kind, entry.name, entry.calories, entry.id
            )?;
        }
        BatchCommand::Remove { kind, id } => {
            if ledger.remove_entry(kind, &id) {
                writeln!(out, "Removed {} {}", kind, id)?;
            } else {
                writeln!(out, "No {} with id {}", kind, id)?;
            }
        }
        BatchCommand::Limit(limit) => {
            ledger.set_limit(limit)?;
            writeln!(out, "Daily limit set to {:.0}", limit)?;
        }
        BatchCommand::Reset => {
            ledger.reset();
            writeln!(out, "Ledger reset")?;
        }
        BatchCommand::Filter { kind, text } => {
            let matches = ledger.filter(kind, &text);
            out.write_all(format_entry_list(&matches, kind).as_bytes())?;
        }
        BatchCommand::Show => {
            out.write_all(render(&ledger.snapshot(), format)?.as_bytes())?;
        }
    }
    Ok(())
}

/// Run a script against the ledger.
///
/// Bad lines are reported to `err` with their line number and skipped.
/// Only I/O failures abort the run.
pub fn run_batch<R, W, E>(
    ledger: &mut Ledger,
    input: R,
    out: &mut W,
    err: &mut E,
    format: OutputFormat,
) -> Result<BatchSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = BatchSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        let outcome = match BatchCommand::parse(&line) {
            Ok(Some(command)) => {
                debug!(line = line_no, ?command, "applying command");
                apply(ledger, command, out, format).map(|_| true)
            }
            Ok(None) => Ok(false),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(true) => summary.applied += 1,
            Ok(false) => {}
            Err(e) if e.is_user_error() => {
                warn!(line = line_no, error = %e, "skipping line");
                writeln!(err, "line {}: {}", line_no, e)?;
                summary.failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}
