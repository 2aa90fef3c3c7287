//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use keycalc::config::NumberLocale;
use std::path::PathBuf;

/// keycalc: replay keypad presses on a two-operand calculator
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (print only the current operand)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Number locale for the display
    #[arg(long, global = true, env = "KEYCALC_LOCALE")]
    pub locale: Option<LocaleArg>,

    /// Display configuration file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keypad buttons and print the display
    Run(RunArgs),

    /// Print the keypad layout
    Keypad(KeypadArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Button labels, e.g. `3 + 4 =` (read from stdin when omitted)
    pub labels: Vec<String>,

    /// Print the display after every press
    #[arg(long)]
    pub trace: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormatArg,
}

/// Arguments for the keypad command
#[derive(Parser, Debug)]
pub struct KeypadArgs {
    /// List element ids instead of drawing the grid
    #[arg(long)]
    pub ids: bool,
}

/// Locale argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocaleArg {
    /// Swedish grouping (1 234)
    Sv,
    /// English grouping (1,234)
    En,
    /// No grouping
    Plain,
}

impl From<LocaleArg> for NumberLocale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Sv => Self::Swedish,
            LocaleArg::En => Self::English,
            LocaleArg::Plain => Self::Plain,
        }
    }
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_operator_labels() {
        let cli = Cli::try_parse_from(["keycalc", "run", "9", "-", "4", "="]).unwrap();
        match cli.command {
            Commands::Run(args) => assert_eq!(args.labels, ["9", "-", "4", "="]),
            Commands::Keypad(_) => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["keycalc", "-vv", "--locale", "en", "keypad"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.locale, Some(LocaleArg::En));
        assert!(matches!(cli.command, Commands::Keypad(_)));
    }

    #[test]
    fn test_parse_run_json_trace() {
        let cli =
            Cli::try_parse_from(["keycalc", "run", "--trace", "--format", "json", "1"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert!(args.trace);
                assert_eq!(args.format, OutputFormatArg::Json);
            }
            Commands::Keypad(_) => panic!("expected run"),
        }
    }

    #[test]
    fn test_locale_arg_conversion() {
        assert_eq!(NumberLocale::from(LocaleArg::Sv), NumberLocale::Swedish);
        assert_eq!(NumberLocale::from(LocaleArg::En), NumberLocale::English);
        assert_eq!(NumberLocale::from(LocaleArg::Plain), NumberLocale::Plain);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["keycalc"]).is_err());
    }
}
