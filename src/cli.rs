//! CLI definitions for termpaint
//!
//! Kept apart from main.rs so xtask can render man pages and the command
//! reference from the same definitions.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

/// Clap styles matching the terminal theme: green for headers and literals,
/// light gray for placeholders.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "termpaint")]
#[command(about = "[ termpaint ] - paint pixels by typing commands")]
#[command(
    long_about = "termpaint - a pixel canvas driven by a typed command line.

Every edit is a command such as `draw_line 0 0 40 20 --fg gold`. Colors
are accepted as names, hex (#rgb, #rrggbb, #rrggbbaa), rgb()/rgba()/hsv()
or plain channel lists. Images are saved as PNG files in the configured
images directory.

QUICK START:
    termpaint                      Start an interactive session
    termpaint run drawing.tp       Run a script of commands
    termpaint predict draw_pi      Show the completion for a partial line
    termpaint config show          Print the active configuration

Inside a session, type `help` for the list of commands and end a line
with `?` to see its completion."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Config file to use instead of ~/.config/termpaint/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (default)
    #[command(long_about = "Read commands from stdin one line at a time.

Each line is run against the canvas and its output is printed below it.
A line ending in `?` is not run; its predicted completion is printed
instead. `!!` runs the last successful line again, `history` lists the
recent ones and `exit` or `quit` ends the session.

EXAMPLE:
    > draw_rectangle 2 2 10 6 --fg navy --outline 1
    Rectangle at 2x2 size 10x6 filled with rgba(0, 0, 128, 255).")]
    Repl,

    /// Run the commands in a script file
    #[command(long_about = "Run every line of a script as a command.

Blank lines and lines starting with `#` are skipped. All lines run even
after a failure; the exit status is 1 if any of them failed.

EXAMPLE:
    termpaint run logo.tp")]
    Run {
        /// Path to the script
        #[arg(help = "Script with one command per line")]
        script: PathBuf,
    },

    /// Predict the completion of a partial command line
    #[command(long_about = "Print the predicted completion of a partial command line.

The words are joined with spaces. A trailing space in the final word is
kept, so `termpaint predict 'draw_pixel '` asks for the next argument.
Prints <complete> when nothing is missing and <invalid> when the line
cannot be completed.

EXAMPLES:
    termpaint predict draw_pi            -> draw_pixel
    termpaint predict draw_pixel 3       -> draw_pixel 3 y")]
    Predict {
        /// The partial line
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        input: Vec<String>,
    },

    /// Configuration management
    #[command(subcommand)]
    #[command(long_about = "View the termpaint configuration.

Configuration is stored in ~/.config/termpaint/config.toml and holds the
default canvas size, the default colors, the images directory and the
history size.

EXAMPLES:
    termpaint config show            Print the configuration
    termpaint config path            Print the config file location")]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Show the config file location
    Path,
}
