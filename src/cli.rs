use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::interface::OutputFormat;
use crate::models::IdGenerator;
use crate::state::{Ledger, DEFAULT_CALORIE_LIMIT};

/// Calorie tracker — balance meals and workouts against a daily limit.
#[derive(Parser, Debug)]
#[command(name = "calorie_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Daily calorie limit to start the session with.
    #[arg(short, long, default_value_t = DEFAULT_CALORIE_LIMIT)]
    pub limit: f64,

    /// Dashboard output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fixed hex salt for entry ids, so scripts can refer to ids they did
    /// not see printed (`00000000000001` is the first entry with salt 0).
    #[arg(long, value_name = "HEX", value_parser = parse_id_salt)]
    pub id_salt: Option<u32>,

    /// Log debug output to stderr (RUST_LOG overrides).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the session ledger from the limit and id options.
    pub fn build_ledger(&self) -> Result<Ledger> {
        let ids = match self.id_salt {
            Some(salt) => IdGenerator::with_salt(salt),
            None => IdGenerator::new(),
        };
        let mut ledger = Ledger::with_ids(ids);
        ledger.set_limit(self.limit)?;
        Ok(ledger)
    }
}

fn parse_id_salt(s: &str) -> std::result::Result<u32, String> {
    let digits = s.trim_start_matches("0x");
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex salt '{}': {}", s, e))
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Track the day interactively.
    #[default]
    Track,

    /// Read commands from stdin, one per line.
    ///
    /// meal <cal> <name>, workout <cal> <name>, remove meal|workout <id>,
    /// limit <cal>, reset, filter meal|workout [text], show
    Batch {
        /// Print the dashboard once the script has finished.
        #[arg(long)]
        summary: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::{run_batch, OutputFormat};
    use crate::models::EntryKind;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["calorie_tracker"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.limit, 2000.0);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.verbose);
        assert!(cli.id_salt.is_none());
    }

    #[test]
    fn test_id_salt_makes_script_removal_work() {
        let cli = Cli::parse_from([
            "calorie_tracker",
            "--id-salt",
            "0",
            "--limit",
            "1500",
            "batch",
        ]);
        let mut ledger = cli.build_ledger().unwrap();
        assert_eq!(ledger.limit(), 1500.0);

        let script = "meal 100 Toast\nmeal 200 Jam\nremove meal 00000000000001\n";
        let mut out = Vec::new();
        let mut err = Vec::new();
        run_batch(
            &mut ledger,
            script.as_bytes(),
            &mut out,
            &mut err,
            cli.format,
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Removed meal 00000000000001"));
        assert_eq!(ledger.entries(EntryKind::Consumed).len(), 1);
        assert_eq!(ledger.consumed_total(), 200.0);
    }

    #[test]
    fn test_id_salt_parsing() {
        let cli = Cli::parse_from(["calorie_tracker", "--id-salt", "0xbeef"]);
        assert_eq!(cli.id_salt, Some(0xbeef));
        assert!(Cli::try_parse_from(["calorie_tracker", "--id-salt", "xyz"]).is_err());
    }

    #[test]
    fn test_negative_limit_rejected_when_building() {
        let cli = Cli::parse_from(["calorie_tracker", "--limit=-5"]);
        assert!(cli.build_ledger().is_err());
    }

    #[test]
    fn test_batch_with_options() {
        let cli = Cli::parse_from([
            "calorie_tracker",
            "--limit",
            "1800",
            "--format",
            "json",
            "batch",
            "--summary",
        ]);
        assert_eq!(cli.limit, 1800.0);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Some(Command::Batch { summary: true })));
    }
}
