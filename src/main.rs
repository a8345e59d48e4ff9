use std::io::{self, Write};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use calorie_tracker_rs::cli::{Cli, Command};
use calorie_tracker_rs::error::Result;
use calorie_tracker_rs::interface::{
    format_entry_list, prompt_entry_form, prompt_filter_text, prompt_limit, prompt_menu,
    prompt_remove, prompt_yes_no, render, run_batch, MenuAction, OutputFormat, TerminalRenderer,
};
use calorie_tracker_rs::models::EntryKind;
use calorie_tracker_rs::state::Ledger;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let ledger = cli.build_ledger()?;
    info!(limit = ledger.limit(), "session started");

    match cli.command.unwrap_or_default() {
        Command::Track => cmd_track(ledger, cli.format),
        Command::Batch { summary } => cmd_batch(ledger, cli.format, summary),
    }
}

/// Interactive session: menu loop with the dashboard redrawn on every change.
fn cmd_track(mut ledger: Ledger, format: OutputFormat) -> Result<()> {
    print!("{}", render(&ledger.snapshot(), format)?);
    ledger.subscribe(Box::new(TerminalRenderer::new(io::stdout(), format)));

    loop {
        println!();
        let action = prompt_menu()?;
        debug!(?action, "menu selection");

        let outcome = match action {
            MenuAction::AddMeal => add_entry(&mut ledger, EntryKind::Consumed),
            MenuAction::AddWorkout => add_entry(&mut ledger, EntryKind::Burned),
            MenuAction::RemoveMeal => remove_entry(&mut ledger, EntryKind::Consumed),
            MenuAction::RemoveWorkout => remove_entry(&mut ledger, EntryKind::Burned),
            MenuAction::FilterMeals => filter_entries(&ledger, EntryKind::Consumed),
            MenuAction::FilterWorkouts => filter_entries(&ledger, EntryKind::Burned),
            MenuAction::SetLimit => {
                prompt_limit(ledger.limit()).and_then(|limit| ledger.set_limit(limit))
            }
            MenuAction::Reset => {
                if prompt_yes_no("Clear all meals and workouts?", false)? {
                    ledger.reset();
                }
                Ok(())
            }
            MenuAction::Quit => break,
        };

        // Bad input is reported and the session carries on.
        match outcome {
            Err(e) if e.is_user_error() => println!("{}", e),
            other => other?,
        }
    }

    Ok(())
}

fn add_entry(ledger: &mut Ledger, kind: EntryKind) -> Result<()> {
    let form = prompt_entry_form(kind)?;
    ledger.add_entry(kind, form.name, form.calories)?;
    Ok(())
}

fn remove_entry(ledger: &mut Ledger, kind: EntryKind) -> Result<()> {
    if let Some(id) = prompt_remove(ledger, kind)? {
        ledger.remove_entry(kind, &id);
    }
    Ok(())
}

fn filter_entries(ledger: &Ledger, kind: EntryKind) -> Result<()> {
    let text = prompt_filter_text(kind)?;
    print!("{}", format_entry_list(&ledger.filter(kind, &text), kind));
    Ok(())
}

/// Non-interactive session driven by commands on stdin.
fn cmd_batch(mut ledger: Ledger, format: OutputFormat, summary: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    let result = run_batch(&mut ledger, stdin.lock(), &mut out, &mut err, format)?;
    info!(
        applied = result.applied,
        failed = result.failed,
        "batch finished"
    );

    if summary {
        out.write_all(render(&ledger.snapshot(), format)?.as_bytes())?;
    }
    out.flush()?;

    Ok(())
}
