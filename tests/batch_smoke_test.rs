use calorie_tracker_rs::interface::{run_batch, BatchSummary, OutputFormat};
use calorie_tracker_rs::models::{EntryKind, IdGenerator};
use calorie_tracker_rs::state::Ledger;

fn run(ledger: &mut Ledger, script: &str, format: OutputFormat) -> (BatchSummary, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = run_batch(ledger, script.as_bytes(), &mut out, &mut err, format).unwrap();
    (
        summary,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_script_drives_ledger() {
    let script = "\
# a typical day
meal 300 Eggs
workout 500 Morning Run
limit 150
show
";
    let mut ledger = Ledger::new();
    let (summary, out, err) = run(&mut ledger, script, OutputFormat::Text);

    assert_eq!(summary, BatchSummary { applied: 4, failed: 0 });
    assert!(err.is_empty());
    assert_eq!(ledger.net(), -200.0);
    assert_eq!(ledger.remaining(), 350.0);

    assert!(out.contains("Added meal Eggs (300 cal)"));
    assert!(out.contains("Added workout Morning Run (500 cal)"));
    assert!(out.contains("Daily limit set to 150"));
    assert!(!out.contains("(over limit)"));
}

#[test]
fn test_script_goes_over_limit() {
    let script = "\
meal 300 Eggs
limit 150
show
";
    let mut ledger = Ledger::new();
    let (summary, out, _) = run(&mut ledger, script, OutputFormat::Text);

    assert_eq!(summary, BatchSummary { applied: 3, failed: 0 });
    assert_eq!(ledger.remaining(), -150.0);
    assert!(out.contains("Remaining:      -150  (over limit)"));
}

#[test]
fn test_remove_by_printed_id() {
    let mut ledger = Ledger::with_ids(IdGenerator::with_salt(0x1234));
    let script = "\
meal 250 Toast
meal 400 Pasta
remove meal 00001234000001
remove meal 00001234000001
";
    let (summary, out, _) = run(&mut ledger, script, OutputFormat::Text);

    assert_eq!(summary.applied, 4);
    assert!(out.contains("Removed meal 00001234000001"));
    assert!(out.contains("No meal with id 00001234000001"));

    let meals = ledger.entries(EntryKind::Consumed);
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].name, "Pasta");
    assert_eq!(ledger.consumed_total(), 400.0);
}

#[test]
fn test_filter_and_reset() {
    let script = "\
meal 120 Greek Yogurt
meal 300 Yogurt Parfait
meal 500 Burrito
filter meal yogurt
reset
filter meal
";
    let mut ledger = Ledger::new();
    let (summary, out, _) = run(&mut ledger, script, OutputFormat::Text);

    assert_eq!(summary.failed, 0);
    assert!(out.contains("--- Meals (2) ---"));
    assert!(out.contains("Greek Yogurt"));
    assert!(out.contains("Meals: (none)"));
    assert!(ledger.is_empty());
    assert_eq!(ledger.limit(), 2000.0);
}

#[test]
fn test_bad_lines_are_skipped() {
    let script = "\
meal Eggs
meal 200
workout abc Swim
limit
dance 100
meal 200 Soup
";
    let mut ledger = Ledger::new();
    let (summary, _, err) = run(&mut ledger, script, OutputFormat::Text);

    assert_eq!(summary, BatchSummary { applied: 1, failed: 5 });
    assert!(err.contains("line 2: Validation error: Please fill in all fields."));
    assert!(err.contains("line 4: Validation error: Please add a daily limit."));
    assert!(err.contains("line 5: Unknown command: dance 100"));
    assert_eq!(ledger.consumed_total(), 200.0);
}

#[test]
fn test_json_show() {
    let mut ledger = Ledger::new();
    let (_, out, _) = run(&mut ledger, "meal 2500 Feast\nshow\n", OutputFormat::Json);

    let json_line = out.lines().last().unwrap();
    let json: serde_json::Value = serde_json::from_str(json_line).unwrap();
    assert_eq!(json["net"], 2500.0);
    assert_eq!(json["remaining"], -500.0);
    assert_eq!(json["progress_percentage"], 100.0);
    assert_eq!(json["over_limit"], true);
    assert_eq!(json["style"], "over_limit");
    assert_eq!(json["meals"][0]["name"], "Feast");
    assert_eq!(json["meals"][0]["kind"], "consumed");
}
