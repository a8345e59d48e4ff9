use std::io::Write;

use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::models::{Entry, EntryKind, Snapshot};
use crate::state::LedgerObserver;

/// Width of the progress bar, in cells.
pub const PROGRESS_BAR_WIDTH: usize = 30;

/// How the dashboard is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Visual state of the remaining-calories panel and the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStyle {
    Normal,
    OverLimit,
}

impl DisplayStyle {
    pub fn for_snapshot(snapshot: &Snapshot<'_>) -> Self {
        if snapshot.over_limit() {
            DisplayStyle::OverLimit
        } else {
            DisplayStyle::Normal
        }
    }

    fn bar_fill(self) -> char {
        match self {
            DisplayStyle::Normal => '#',
            DisplayStyle::OverLimit => '!',
        }
    }
}

/// Render a bounded progress bar, e.g. `[#######-------]  50%`.
pub fn progress_bar(percentage: f64, width: usize, style: DisplayStyle) -> String {
    let percentage = percentage.clamp(0.0, 100.0);
    let filled = ((percentage / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    let mut bar = String::with_capacity(width + 8);
    bar.push('[');
    bar.extend(std::iter::repeat(style.bar_fill()).take(filled));
    bar.extend(std::iter::repeat('-').take(width - filled));
    bar.push(']');
    bar.push_str(&format!(" {:>3.0}%", percentage));
    bar
}

/// Format the totals panel for a terminal.
pub fn format_dashboard(snapshot: &Snapshot<'_>) -> String {
    let style = DisplayStyle::for_snapshot(snapshot);
    let over = if style == DisplayStyle::OverLimit {
        "  (over limit)"
    } else {
        ""
    };

    let mut out = String::new();
    out.push_str("=== Daily Calories ===\n");
    out.push_str(&format!("Daily limit: {:>7.0}\n", snapshot.limit));
    out.push_str(&format!("Net total:   {:>7.0}\n", snapshot.net));
    out.push_str(&format!("Consumed:    {:>7.0}\n", snapshot.consumed_total));
    out.push_str(&format!("Burned:      {:>7.0}\n", snapshot.burned_total));
    out.push_str(&format!("Remaining:   {:>7.0}{}\n", snapshot.remaining, over));
    out.push_str(&progress_bar(
        snapshot.progress_percentage(),
        PROGRESS_BAR_WIDTH,
        style,
    ));
    out.push('\n');
    out
}

/// Format a list of entries with their ids, for selection and removal.
pub fn format_entry_list(entries: &[&Entry], kind: EntryKind) -> String {
    let title = match kind {
        EntryKind::Consumed => "Meals",
        EntryKind::Burned => "Workouts",
    };

    if entries.is_empty() {
        return format!("{}: (none)\n", title);
    }

    let name_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(10);

    let mut out = format!("--- {} ({}) ---\n", title, entries.len());
    for entry in entries {
        out.push_str(&format!(
            "  {}  {:<width$}  {:>6.0} cal\n",
            entry.id,
            entry.name,
            entry.calories,
            width = name_width
        ));
    }
    out
}

#[derive(Serialize)]
struct DashboardJson<'a> {
    #[serde(flatten)]
    snapshot: &'a Snapshot<'a>,
    progress_percentage: f64,
    over_limit: bool,
    style: DisplayStyle,
}

/// Format the snapshot, progress and style as a single JSON line.
pub fn format_dashboard_json(snapshot: &Snapshot<'_>) -> Result<String> {
    let doc = DashboardJson {
        snapshot,
        progress_percentage: snapshot.progress_percentage(),
        over_limit: snapshot.over_limit(),
        style: DisplayStyle::for_snapshot(snapshot),
    };
    Ok(serde_json::to_string(&doc)?)
}

pub fn render(snapshot: &Snapshot<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_dashboard(snapshot)),
        OutputFormat::Json => format_dashboard_json(snapshot).map(|mut line| {
            line.push('\n');
            line
        }),
    }
}

/// Redraws the dashboard into a writer after every ledger change.
pub struct TerminalRenderer<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn draw(&mut self, snapshot: &Snapshot<'_>) -> Result<()> {
        let text = render(snapshot, self.format)?;
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> LedgerObserver for TerminalRenderer<W> {
    fn on_change(&mut self, snapshot: &Snapshot<'_>) {
        if let Err(e) = self.draw(snapshot) {
            warn!(error = %e, "failed to redraw dashboard");
        }
    }
}
