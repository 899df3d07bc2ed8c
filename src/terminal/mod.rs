//! The editing session.
//!
//! A [`Terminal`] owns the canvas, the default colors, the history and the
//! output transcript. Text goes in through [`Terminal::run_str`] or
//! [`Terminal::predict_command`]; results come back through
//! [`Terminal::drain_output`].

pub mod history;
pub mod output;
mod predict;
pub mod tokenize;

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use tracing::debug;

use crate::canvas::{BlankCanvas, Canvas, ImageStore};
use crate::color::{create_color, Color};
use crate::commands::{Command, CommandOptions, OptionKey, Registry};
use crate::config::Config;

pub use history::History;
pub use output::{OutputKind, OutputLine, Transcript};
pub use tokenize::ParsedLine;

#[derive(Debug)]
pub struct Terminal {
    registry: Registry,
    canvas: Canvas,
    blank: BlankCanvas,
    store: ImageStore,
    foreground: Color,
    background: Color,
    display_background: Color,
    history: History,
    output: Transcript,
    help_cursor: Option<(String, usize)>,
}

impl Terminal {
    /// A session over a blank canvas with the built-in commands, a white
    /// foreground and a black background.
    pub fn new(blank: BlankCanvas, store: ImageStore) -> Self {
        Self {
            registry: Registry::builtin(),
            canvas: blank.to_canvas(),
            blank,
            store,
            foreground: Color::WHITE,
            background: Color::BLACK,
            display_background: Color::BLACK,
            history: History::default(),
            output: Transcript::default(),
            help_cursor: None,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
        let blank = BlankCanvas {
            width: config.canvas.width,
            height: config.canvas.height,
            background: create_color(&config.canvas.background)
                .context("Invalid canvas background")?,
        };
        let foreground =
            create_color(&config.colors.foreground).context("Invalid foreground color")?;
        let background =
            create_color(&config.colors.background).context("Invalid background color")?;

        Ok(Self::new(blank, ImageStore::new(config.images_directory()))
            .with_colors(foreground, background)
            .with_history(History::new(config.history.capacity)))
    }

    pub fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    pub fn with_history(mut self, history: History) -> Self {
        self.history = history;
        self
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Canvas that `load_image default` restores.
    pub fn blank(&self) -> BlankCanvas {
        self.blank
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn display_background(&self) -> Color {
        self.display_background
    }

    pub fn set_display_background(&mut self, color: Color) {
        self.display_background = color;
    }

    /// Readable text color for the display background.
    pub fn display_text(&self) -> Color {
        if self.display_background.hsv().v < 50.0 {
            Color::WHITE
        } else {
            Color::BLACK
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_previous(&mut self) -> Option<String> {
        self.history.previous().map(str::to_string)
    }

    pub fn history_next(&mut self) -> Option<String> {
        self.history.next().map(str::to_string)
    }

    pub fn output_info(&mut self, text: impl Into<String>) {
        self.output.push(OutputKind::Info, text);
    }

    pub fn output_success(&mut self, text: impl Into<String>) {
        self.output.push(OutputKind::Success, text);
    }

    pub fn output_error(&mut self, text: impl Into<String>) {
        self.output.push(OutputKind::Error, text);
    }

    pub fn transcript(&self) -> &Transcript {
        &self.output
    }

    pub fn drain_output(&mut self) -> Vec<OutputLine> {
        self.output.drain()
    }

    /// Page of `name`'s help to show when no page was asked for: the one
    /// after the last shown page of the same command, wrapping to 1.
    pub(crate) fn next_help_page(&self, name: &str, page_count: usize) -> usize {
        match &self.help_cursor {
            Some((last, page)) if last == name && *page < page_count => page + 1,
            _ => 1,
        }
    }

    pub(crate) fn record_help_page(&mut self, name: &str, page: usize) {
        self.help_cursor = Some((name.to_string(), page));
    }

    /// Parse and run one command line.
    ///
    /// Blank input returns `false` without output. Successful lines are
    /// added to the history.
    pub fn run_str(&mut self, input: &str) -> bool {
        let Some(line) = ParsedLine::parse(input) else {
            return false;
        };

        let ok = self.dispatch(&line);
        debug!(command = %line.command, args = line.args.len(), ok, "Dispatched command");
        if ok {
            self.history.push(input.trim());
        }
        ok
    }

    fn dispatch(&mut self, line: &ParsedLine) -> bool {
        let Some(command) = self.registry.get(&line.command) else {
            self.output_error(format!("`{}` is not a valid command.", line.command));
            self.output_error("Use `help` to see a list of available commands.");
            return false;
        };

        match self.resolve_options(command, &line.options) {
            Ok(options) => command.execute(self, &line.args, &options),
            Err(message) => {
                self.output_error(message);
                false
            }
        }
    }

    /// Check `raw` against the command's declared options and resolve the
    /// colors it draws with.
    pub(crate) fn resolve_options(
        &self,
        command: &dyn Command,
        raw: &BTreeMap<String, String>,
    ) -> std::result::Result<CommandOptions, String> {
        let known = command.known_options();
        let invalid: Vec<&str> = raw
            .keys()
            .filter(|name| !OptionKey::parse(name).is_some_and(|key| known.contains(&key)))
            .map(String::as_str)
            .collect();
        if !invalid.is_empty() {
            return Err(format!(
                "Invalid options for `{}`: {}",
                command.name(),
                invalid.join(", ")
            ));
        }

        let mut options = CommandOptions::new(self.foreground, self.background);
        for (name, value) in raw {
            let Some(key) = OptionKey::parse(name) else {
                continue;
            };
            match key {
                OptionKey::Fg => options.fg = create_color(value).map_err(|e| e.to_string())?,
                OptionKey::Bg => options.bg = create_color(value).map_err(|e| e.to_string())?,
                _ => {}
            }
            options.insert(key, value.clone());
        }
        Ok(options)
    }
}
