//! Command protocol and the built-in command registry.
//!
//! Every command is a zero-sized type implementing [`Command`]. The
//! registry maps names to `&'static dyn Command`, so the terminal can hand
//! itself mutably to a command while still holding the registry.

pub mod args;

mod background;
mod draw_circle;
mod draw_line;
mod draw_pixel;
mod draw_polygon;
mod draw_rectangle;
mod foreground;
mod help;
mod image_info;
mod load_image;
mod ls;
mod ping;
mod save_image;
mod terminal_background;
mod undo;

use std::collections::BTreeMap;

use crate::color::Color;
use crate::terminal::Terminal;

pub use background::Background;
pub use draw_circle::DrawCircle;
pub use draw_line::DrawLine;
pub use draw_pixel::DrawPixel;
pub use draw_polygon::DrawPolygon;
pub use draw_rectangle::DrawRectangle;
pub use foreground::Foreground;
pub use help::Help;
pub use image_info::ImageInfo;
pub use load_image::LoadImage;
pub use ls::Ls;
pub use ping::Ping;
pub use save_image::SaveImage;
pub use terminal_background::TerminalBackground;
pub use undo::Undo;

/// Named options a command may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKey {
    Fg,
    Bg,
    NoFill,
    Outline,
    Overwrite,
}

impl OptionKey {
    pub const ALL: [OptionKey; 5] = [
        OptionKey::Fg,
        OptionKey::Bg,
        OptionKey::NoFill,
        OptionKey::Outline,
        OptionKey::Overwrite,
    ];

    /// Name as typed after `--`.
    pub fn name(self) -> &'static str {
        match self {
            OptionKey::Fg => "fg",
            OptionKey::Bg => "bg",
            OptionKey::NoFill => "no-fill",
            OptionKey::Outline => "outline",
            OptionKey::Overwrite => "overwrite",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Options handed to a command after the terminal resolved them.
///
/// `fg` and `bg` are always present: either parsed from `--fg`/`--bg` or
/// taken from the terminal defaults. Other options keep their raw value;
/// a bare flag has an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOptions {
    pub fg: Color,
    pub bg: Color,
    raw: BTreeMap<OptionKey, String>,
}

impl CommandOptions {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            raw: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, key: OptionKey, value: impl Into<String>) {
        self.raw.insert(key, value.into());
    }

    pub fn with(mut self, key: OptionKey, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// `true` when the option was given, with or without a value.
    pub fn has(&self, key: OptionKey) -> bool {
        self.raw.contains_key(&key)
    }

    pub fn value(&self, key: OptionKey) -> Option<&str> {
        self.raw.get(&key).map(String::as_str)
    }
}

/// A named operation invocable from the command line.
pub trait Command: Sync {
    /// Dispatch key.
    fn name(&self) -> &'static str;

    /// Ordered help text blocks shown by `help <name> [page]`.
    fn help_pages(&self) -> &'static [&'static str];

    /// Options this command accepts. Anything else is rejected before
    /// [`Command::execute`] runs.
    fn known_options(&self) -> &'static [OptionKey] {
        &[]
    }

    /// Run the command. Returns `false` only after writing at least one
    /// error line to the terminal.
    fn execute(&self, terminal: &mut Terminal, args: &[String], options: &CommandOptions) -> bool;

    /// Suggest how to continue `args`.
    ///
    /// A reply starting with a space is a new token, any other non-empty
    /// reply replaces the last token, `""` means the input is complete and
    /// `None` means it is invalid.
    fn predict(&self, terminal: &Terminal, args: &[String], options: &CommandOptions)
        -> Option<String>;
}

/// Name to command table.
#[derive(Clone, Default)]
pub struct Registry {
    commands: BTreeMap<&'static str, &'static dyn Command>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in command.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let builtin: [&'static dyn Command; 15] = [
            &Ping,
            &Help,
            &Ls,
            &LoadImage,
            &SaveImage,
            &DrawPixel,
            &DrawLine,
            &DrawRectangle,
            &DrawCircle,
            &DrawPolygon,
            &Undo,
            &ImageInfo,
            &Foreground,
            &Background,
            &TerminalBackground,
        ];
        for command in builtin {
            registry.register(command);
        }
        registry
    }

    /// Add a command, replacing any command with the same name.
    pub fn register(&mut self, command: &'static dyn Command) {
        self.commands.insert(command.name(), command);
    }

    pub fn get(&self, name: &str) -> Option<&'static dyn Command> {
        self.commands.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// First name (in sorted order) starting with `prefix`.
    pub fn complete(&self, prefix: &str) -> Option<&'static str> {
        self.names().find(|name| name.starts_with(prefix))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
