//! CLI configuration

use std::fs;
use std::path::Path;

use keycalc::config::DisplayConfig;

use crate::commands::Cli;
use crate::error::{CliError, CliResult};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet - current operand only, errors only in the log
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - computed results are logged
    Verbose,
    /// Debug - every press is logged
    Debug,
    /// Trace - ignored inputs are logged too
    Trace,
}

impl Verbosity {
    /// Map `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info,keycalc=debug",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Display settings passed to the calculator
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set display settings
    #[must_use]
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Build the configuration from parsed arguments.
    ///
    /// The config file is read first; `--locale` then overrides its locale.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let mut display = match &cli.config {
            Some(path) => load_display_config(path)?,
            None => DisplayConfig::default(),
        };
        if let Some(locale) = cli.locale {
            display.locale = locale.into();
        }

        Ok(Self::new()
            .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
            .with_display(display))
    }
}

/// Read a JSON display configuration file
pub fn load_display_config(path: &Path) -> CliResult<DisplayConfig> {
    let text = fs::read_to_string(path).map_err(|e| {
        CliError::config(format!("cannot read {}: {e}", path.display()))
    })?;
    DisplayConfig::from_json(&text)
        .map_err(|e| CliError::config(format!("{}: {e}", path.display())))
}
