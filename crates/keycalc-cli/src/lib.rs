//! keycalc CLI library
//!
//! Command-line front end for the [`keycalc`] calculator: presses keypad
//! buttons given as labels and prints the resulting display.

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
mod output;

pub use commands::{Cli, Commands, KeypadArgs, LocaleArg, OutputFormatArg, RunArgs};
pub use config::{load_display_config, CliConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render_display, render_frames, render_keypad};

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity level. Calling this
/// more than once is harmless.
pub fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Split raw arguments into button labels.
///
/// Each argument may hold several whitespace-separated labels, so
/// `run "3 + 4" =` and `run 3 + 4 =` press the same buttons.
#[must_use]
pub fn split_labels<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.as_ref().split_whitespace())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_labels_mixed() {
        let labels = split_labels(&["3 + 4", "=", "  "]);
        assert_eq!(labels, ["3", "+", "4", "="]);
    }

    #[test]
    fn test_split_labels_empty() {
        let labels = split_labels::<&str>(&[]);
        assert!(labels.is_empty());
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing(Verbosity::Quiet);
        init_tracing(Verbosity::Debug);
    }
}
