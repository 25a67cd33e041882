//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for reverie
#[derive(Parser, Debug)]
#[command(name = "reverie")]
#[command(author, version, about = "Nine-card Lenormand spread reader")]
#[command(long_about = r#"
Reverie walks you through a nine-card reading of a 44-card Lenormand deck.

A reading has four steps:
1. Shuffle the deck
2. Split it into three piles (two percentages, the third pile takes the rest)
3. Regroup the piles in an order of your choice (e.g. 312)
4. Pick nine cards and ask for an interpretation

Configuration files are loaded from (in priority order):
1. REVERIE_* environment variables
2. --config <path>     Explicit config file
3. ./reverie.toml      Project-level config
4. ~/.config/reverie/config.toml   Global config

Example:
  reverie
  reverie --cards my_cards.csv --model gpt-4o-mini
  reverie --seed 42 -vv
"#)]
pub struct Cli {
    /// CSV file with the card meanings (overrides [cards] path)
    #[arg(long, value_name = "PATH")]
    pub cards: Option<PathBuf>,

    /// Model used for the interpretation (overrides [provider] model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Seed the shuffle for a reproducible deck
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write a JSONL transcript of the reading
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "reverie", "--cards", "cards.csv", "-m", "gpt-4o", "--seed", "42", "-vv", "--no-color",
        ]);

        assert_eq!(cli.cards, Some(PathBuf::from("cards.csv")));
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["reverie"]);
        assert!(cli.cards.is_none());
        assert!(cli.seed.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }
}
