//! Output formatting

use console::style;
use keycalc::keypad::Keypad;
use keycalc::session::{DisplaySnapshot, Frame};

use crate::commands::OutputFormatArg;
use crate::error::CliResult;

/// Renders the final display.
///
/// Text output is the previous-operand line followed by the
/// current-operand line; quiet mode prints only the latter.
pub fn render_display(
    display: &DisplaySnapshot,
    format: OutputFormatArg,
    quiet: bool,
) -> CliResult<String> {
    match format {
        OutputFormatArg::Json => Ok(serde_json::to_string_pretty(display)?),
        OutputFormatArg::Text if quiet => Ok(display.current.clone()),
        OutputFormatArg::Text => Ok(format!(
            "{}\n{}",
            style(&display.previous).dim(),
            style(&display.current).bold()
        )),
    }
}

/// Renders every frame of a run
pub fn render_frames(frames: &[Frame], format: OutputFormatArg) -> CliResult<String> {
    match format {
        OutputFormatArg::Json => Ok(serde_json::to_string_pretty(frames)?),
        OutputFormatArg::Text => {
            let width = frames
                .iter()
                .map(|f| f.display.previous.chars().count())
                .max()
                .unwrap_or(0);
            let lines: Vec<String> = frames
                .iter()
                .map(|f| {
                    format!(
                        "{:>4}  {:>width$} | {}",
                        f.label, f.display.previous, f.display.current
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

/// Renders the keypad grid, or its element ids one per line
#[must_use]
pub fn render_keypad(keypad: &Keypad, ids: bool) -> String {
    if ids {
        keypad
            .buttons()
            .iter()
            .map(|b| format!("{}\t{}", b.id, b.action.label()))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        keypad.render_grid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(previous: &str, current: &str) -> DisplaySnapshot {
        DisplaySnapshot {
            previous: previous.into(),
            current: current.into(),
        }
    }

    #[test]
    fn test_render_display_text() {
        console::set_colors_enabled(false);
        let out = render_display(&snapshot("12 +", "3"), OutputFormatArg::Text, false).unwrap();
        assert_eq!(out, "12 +\n3");
    }

    #[test]
    fn test_render_display_quiet() {
        let out = render_display(&snapshot("12 +", "3"), OutputFormatArg::Text, true).unwrap();
        assert_eq!(out, "3");
    }

    #[test]
    fn test_render_display_json() {
        let out = render_display(&snapshot("", "42"), OutputFormatArg::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["current"], "42");
        assert_eq!(value["previous"], "");
    }

    #[test]
    fn test_render_frames_text_aligns_previous() {
        let frames = vec![
            Frame {
                label: "12".into(),
                display: snapshot("", "12"),
            },
            Frame {
                label: "+".into(),
                display: snapshot("12 +", ""),
            },
        ];
        let out = render_frames(&frames, OutputFormatArg::Text).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "  12       | 12");
        assert_eq!(lines[1], "   +  12 + | ");
    }

    #[test]
    fn test_render_frames_json() {
        let frames = vec![Frame {
            label: "5".into(),
            display: snapshot("", "5"),
        }];
        let out = render_frames(&frames, OutputFormatArg::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["label"], "5");
    }

    #[test]
    fn test_render_keypad_ids() {
        let out = render_keypad(&Keypad::new(), true);
        assert!(out.lines().any(|l| l == "btn-all-clear\tAC"));
        assert_eq!(out.lines().count(), 18);
    }

    #[test]
    fn test_render_keypad_grid() {
        let out = render_keypad(&Keypad::new(), false);
        assert_eq!(out, Keypad::new().render_grid());
    }
}
