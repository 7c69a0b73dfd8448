use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use boardsim::core::{load_settings, BoardTheme, DisplaySettings, PieceStyle};
use boardsim::game::Controller;
use boardsim::input::{parse_command, Command, HELP};
use boardsim::rendering::{render_text, BoardView};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board theme: classic, blue, forest
    #[arg(long)]
    theme: Option<BoardTheme>,

    /// Piece style: standard, modern, minimalist
    #[arg(long)]
    style: Option<PieceStyle>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Mark reachable squares of the selected piece
    #[arg(long, overrides_with = "no_hints")]
    hints: bool,

    /// Hide reachable-square markers
    #[arg(long, overrides_with = "hints")]
    no_hints: bool,

    /// Print a JSON board view after every event instead of the text board
    #[arg(long)]
    json: bool,

    /// Settings file (defaults to settings.json in the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    /// Command-line flags win over the settings file
    fn apply_overrides(&self, settings: &mut DisplaySettings) {
        if let Some(theme) = self.theme {
            settings.board_theme = theme;
        }
        if let Some(style) = self.style {
            settings.piece_style = style;
        }
        if self.no_color {
            settings.use_color = false;
        }
        if self.hints {
            settings.show_hints = true;
        }
        if self.no_hints {
            settings.show_hints = false;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boardsim=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref());
    args.apply_overrides(&mut settings);
    info!(
        "[SETTINGS] theme={} style={} hints={} color={}",
        settings.board_theme, settings.piece_style, settings.show_hints, settings.use_color
    );

    let stdout = io::stdout();
    run_session(io::stdin().lock(), &mut stdout.lock(), settings, args.json)?;

    info!("[SESSION] Session ended");
    Ok(())
}

/// Read commands from `input` until `quit` or end of input
fn run_session(
    input: impl BufRead,
    out: &mut impl Write,
    mut settings: DisplaySettings,
    json: bool,
) -> Result<()> {
    let mut controller = Controller::new();
    present(out, &controller, &settings, json)?;

    for line in input.lines() {
        let line = line.context("failed to read input line")?;
        if line.trim().is_empty() {
            prompt(out, json)?;
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!("[INPUT] Rejected input {:?}: {}", line.trim(), e);
                writeln!(out, "{e}")?;
                prompt(out, json)?;
                continue;
            }
        };

        match command {
            Command::Click(square) => {
                controller.click(square);
            }
            Command::Theme(theme) => {
                info!("[SETTINGS] Theme changed to {}", theme);
                settings.board_theme = theme;
            }
            Command::Style(style) => {
                info!("[SETTINGS] Piece style changed to {}", style);
                settings.piece_style = style;
            }
            Command::New => controller.reset(),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                prompt(out, json)?;
                continue;
            }
            Command::Quit => break,
        }

        present(out, &controller, &settings, json)?;
    }

    Ok(())
}

fn present(
    out: &mut impl Write,
    controller: &Controller,
    settings: &DisplaySettings,
    json: bool,
) -> Result<()> {
    if json {
        let view = BoardView::new(controller.state(), settings);
        writeln!(out, "{}", view.to_json().context("failed to encode board view")?)?;
    } else {
        write!(out, "{}", render_text(controller.state(), settings))?;
    }
    prompt(out, json)
}

/// Text mode asks for the next line; JSON mode stays line-oriented
fn prompt(out: &mut impl Write, json: bool) -> Result<()> {
    if !json {
        write!(out, "> ")?;
    }
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_text(script: &str) -> String {
        let settings = DisplaySettings {
            use_color: false,
            ..DisplaySettings::default()
        };
        let mut out = Vec::new();
        run_session(script.as_bytes(), &mut out, settings, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rejected_input_prompts_again() {
        let output = run_text("bogus\n");
        let (_, after_error) = output
            .split_once("Unknown command")
            .expect("rejection should be reported");

        assert!(
            after_error.ends_with("> "),
            "Prompt should follow the error message, got {after_error:?}"
        );
    }

    #[test]
    fn test_help_prompts_again() {
        let output = run_text("help\n");
        let (_, after_help) = output.split_once("Commands:").expect("help text");

        assert!(after_help.ends_with("> "));
    }

    #[test]
    fn test_quit_stops_reading() {
        //! Lines after `quit` never reach the controller
        let output = run_text("e2\nquit\ne4\n");

        assert_eq!(output.matches("Light to move").count(), 2);
        assert!(!output.contains("Dark to move"));
    }

    #[test]
    fn test_json_mode_emits_one_view_per_event() {
        let mut out = Vec::new();
        run_session("e2\ne4\n".as_bytes(), &mut out, DisplaySettings::default(), true).unwrap();
        let output = String::from_utf8(out).unwrap();

        let views: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(views.len(), 3);
        assert_eq!(views[2]["side_to_move"], "dark");
        assert!(!output.contains("> "));
    }
}
