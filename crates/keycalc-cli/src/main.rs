//! keycalc CLI: replay keypad presses on a two-operand calculator
//!
//! ## Usage
//!
//! ```bash
//! keycalc run 1 2 + 3 =            # Prints "15"
//! keycalc --locale en run 1 2 3 4  # Prints "1,234"
//! echo "6 ÷ 3 =" | keycalc run     # Labels from stdin
//! keycalc run --trace 9 - 4 =      # Display after every press
//! keycalc keypad                   # Draw the keypad
//! ```

use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use clap::Parser;
use keycalc::driver::{CalculatorDriver, HeadlessDriver};
use keycalc::keypad::Keypad;
use keycalc_cli::{
    init_tracing, render_display, render_frames, render_keypad, split_labels, Cli, CliConfig,
    CliError, CliResult, Commands, KeypadArgs, RunArgs,
};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = CliConfig::from_cli(&cli)?;
    init_tracing(config.verbosity);
    debug!(locale = %config.display.locale, "configuration loaded");

    match cli.command {
        Commands::Run(args) => run_calculator(&config, &args),
        Commands::Keypad(args) => {
            run_keypad(&args);
            Ok(())
        }
    }
}

fn run_calculator(config: &CliConfig, args: &RunArgs) -> CliResult<()> {
    let labels = if args.labels.is_empty() {
        read_stdin_labels()?
    } else {
        split_labels(&args.labels)
    };

    let mut driver = HeadlessDriver::with_config(config.display.clone());
    for label in &labels {
        driver.press(label)?;
    }

    let rendered = if args.trace {
        render_frames(driver.transcript(), args.format)?
    } else {
        render_display(
            driver.session().display(),
            args.format,
            config.verbosity.is_quiet(),
        )?
    };
    println!("{rendered}");
    Ok(())
}

fn read_stdin_labels() -> CliResult<Vec<String>> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::invalid_argument(
            "no button labels given (pass them as arguments or pipe them on stdin)",
        ));
    }
    let mut input = String::new();
    stdin.read_to_string(&mut input)?;
    Ok(split_labels(&[input]))
}

fn run_keypad(args: &KeypadArgs) {
    println!("{}", render_keypad(&Keypad::new(), args.ids));
}
