//! termpaint - CLI entry point

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use termpaint::cli::{Cli, Commands, ConfigCommands};
use termpaint::theme::{current_theme, render_line, Theme};
use termpaint::{logging, Config, Terminal};

/// Marker printed by `predict` when the line needs nothing more.
const COMPLETE: &str = "<complete>";
/// Marker printed by `predict` when the line cannot be completed.
const INVALID: &str = "<invalid>";

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn open_terminal(config_path: Option<&Path>) -> Result<Terminal> {
    let config = load_config(config_path)?;
    Terminal::from_config(&config)
}

/// Print and clear everything the terminal has written so far.
fn flush_output(terminal: &mut Terminal, theme: &Theme) {
    for line in terminal.drain_output() {
        println!("{}", render_line(theme, &line));
    }
}

fn format_prediction(prediction: Option<String>) -> String {
    match prediction {
        Some(line) if line.is_empty() => COMPLETE.to_string(),
        Some(line) => line,
        None => INVALID.to_string(),
    }
}

/// Replace `!!` with the most recent history entry.
fn expand_history(terminal: &Terminal, line: &str) -> Option<String> {
    if line.trim() == "!!" {
        return terminal.history().entries().next().map(str::to_string);
    }
    Some(line.to_string())
}

#[cfg(not(tarpaulin_include))]
fn cmd_repl(config_path: Option<&Path>) -> Result<ExitCode> {
    let mut terminal = open_terminal(config_path)?;
    let theme = current_theme();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    info!(store = %terminal.store().directory().display(), "Session started");

    loop {
        let prompt = theme.display_text(
            "> ",
            terminal.display_background(),
            terminal.display_text(),
        );
        print!("{}", prompt);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);

        match line.trim() {
            "exit" | "quit" => break,
            "history" => {
                for entry in terminal.history().entries() {
                    println!("{}", theme.secondary_text(entry));
                }
                continue;
            }
            _ => {}
        }

        let Some(line) = expand_history(&terminal, line) else {
            println!("{}", theme.error_text("No previous command."));
            continue;
        };
        let line = line.as_str();

        if let Some(partial) = line.strip_suffix('?') {
            let prediction = terminal.predict_command(partial);
            println!("{}", theme.secondary_text(&format_prediction(prediction)));
            continue;
        }

        terminal.run_str(line);
        flush_output(&mut terminal, &theme);
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_run(config_path: Option<&Path>, script: &Path) -> Result<ExitCode> {
    let source = fs::read_to_string(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    let mut terminal = open_terminal(config_path)?;
    let theme = current_theme();

    let mut failures = 0usize;
    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        println!("{}", theme.accent_text(&format!("> {}", trimmed)));
        if !terminal.run_str(trimmed) {
            failures += 1;
        }
        flush_output(&mut terminal, &theme);
    }

    info!(script = %script.display(), failures, "Script finished");
    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_predict(config_path: Option<&Path>, input: &[String]) -> Result<ExitCode> {
    let terminal = open_terminal(config_path)?;
    println!("{}", format_prediction(terminal.predict_command(&input.join(" "))));
    Ok(ExitCode::SUCCESS)
}

fn cmd_config_show(config_path: Option<&Path>) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", current_theme().primary_text(toml_str.trim_end()));
    Ok(ExitCode::SUCCESS)
}

fn cmd_config_path(config_path: Option<&Path>) -> Result<ExitCode> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };
    println!("{}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let _log_guard = logging::init();
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        None | Some(Commands::Repl) => cmd_repl(config_path),
        Some(Commands::Run { script }) => cmd_run(config_path, &script),
        Some(Commands::Predict { input }) => cmd_predict(config_path, &input),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => cmd_config_show(config_path),
            ConfigCommands::Path => cmd_config_path(config_path),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_markers() {
        assert_eq!(format_prediction(Some(String::new())), COMPLETE);
        assert_eq!(format_prediction(None), INVALID);
        assert_eq!(format_prediction(Some("ping".into())), "ping");
    }

    #[test]
    fn bang_bang_repeats_last_line() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut config = Config::default();
        config.storage.directory = temp.path().display().to_string();
        let mut terminal = Terminal::from_config(&config).unwrap();

        assert_eq!(expand_history(&terminal, "!!"), None);
        assert!(terminal.run_str("ping a"));
        assert!(!terminal.run_str("nope"));
        assert_eq!(expand_history(&terminal, "!!").as_deref(), Some("ping a"));
        assert_eq!(expand_history(&terminal, "undo").as_deref(), Some("undo"));
    }
}
