use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::interface::forms::{parse_entry_form, parse_limit, EntryForm};
use crate::models::{EntryId, EntryKind};
use crate::state::Ledger;

/// Actions offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddMeal,
    AddWorkout,
    RemoveMeal,
    RemoveWorkout,
    FilterMeals,
    FilterWorkouts,
    SetLimit,
    Reset,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 9] = [
        MenuAction::AddMeal,
        MenuAction::AddWorkout,
        MenuAction::RemoveMeal,
        MenuAction::RemoveWorkout,
        MenuAction::FilterMeals,
        MenuAction::FilterWorkouts,
        MenuAction::SetLimit,
        MenuAction::Reset,
        MenuAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddMeal => "Add meal",
            MenuAction::AddWorkout => "Add workout",
            MenuAction::RemoveMeal => "Remove meal",
            MenuAction::RemoveWorkout => "Remove workout",
            MenuAction::FilterMeals => "Filter meals",
            MenuAction::FilterWorkouts => "Filter workouts",
            MenuAction::SetLimit => "Set daily limit",
            MenuAction::Reset => "Reset day",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Show the main menu and return the chosen action.
pub fn prompt_menu() -> Result<MenuAction> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuAction::ALL[selection])
}

/// Ask for the name and calories of a meal or workout.
///
/// Empty or non-numeric fields come back as a validation error.
pub fn prompt_entry_form(kind: EntryKind) -> Result<EntryForm> {
    let name: String = Input::new()
        .with_prompt(format!("{} name", capitalize(kind.label())))
        .allow_empty(true)
        .interact_text()?;

    let calories: String = Input::new()
        .with_prompt("Calories")
        .allow_empty(true)
        .interact_text()?;

    parse_entry_form(&name, &calories)
}

/// Ask for a new daily limit.
pub fn prompt_limit(current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Daily limit (currently {:.0})", current))
        .allow_empty(true)
        .interact_text()?;

    parse_limit(&input)
}

/// Let the user pick an entry to delete and confirm the deletion.
///
/// Returns `None` when there is nothing to remove, the user cancels, or
/// the confirmation is declined.
pub fn prompt_remove(ledger: &Ledger, kind: EntryKind) -> Result<Option<EntryId>> {
    let entries = ledger.entries(kind);
    if entries.is_empty() {
        println!("No {}s to remove.", kind.label());
        return Ok(None);
    }

    let mut options: Vec<String> = entries
        .iter()
        .map(|e| format!("{} ({:.0} cal)", e.name, e.calories))
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(format!("Which {} should be removed?", kind.label()))
        .items(&options)
        .default(0)
        .interact()?;

    if selection >= entries.len() {
        return Ok(None);
    }

    if !prompt_yes_no("Are you sure?", false)? {
        return Ok(None);
    }

    Ok(Some(entries[selection].id.clone()))
}

/// Ask for filter text. Empty text shows everything.
pub fn prompt_filter_text(kind: EntryKind) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(format!("Filter {}s by name", kind.label()))
        .allow_empty(true)
        .interact_text()?)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
