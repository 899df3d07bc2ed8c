//! Next-token prediction for partially typed lines.

use crate::color::create_color;
use crate::commands::args::{parse_count, predict_color};
use crate::commands::{Command, OptionKey};

use super::{ParsedLine, Terminal};

impl Terminal {
    /// Suggest a completion for `input` without touching any state.
    ///
    /// Returns the whole completed line, `Some("")` when the input is
    /// already complete, or `None` when it cannot be completed.
    pub fn predict_command(&self, input: &str) -> Option<String> {
        let line = ParsedLine::parse(input)?;
        let typing = !input.ends_with(char::is_whitespace);
        let only_name = line.args.is_empty() && line.options.is_empty();

        let Some(command) = self.registry.get(&line.command) else {
            if typing && only_name {
                return self.registry.complete(&line.command).map(str::to_string);
            }
            return None;
        };

        if let Some(name) = &line.last_option {
            if let Some(decided) = self.predict_option(command, &line, name, input, typing) {
                return decided;
            }
        }

        let options = self.resolve_options(command, &line.options).ok()?;
        if options
            .value(OptionKey::Outline)
            .is_some_and(|width| parse_count(width).is_err())
        {
            return None;
        }

        let reply = command.predict(self, &line.args, &options)?;
        if reply.is_empty() {
            return Some(reply);
        }
        // Past the first option only further options can be appended.
        if !line.options.is_empty() && !reply.starts_with(" --") {
            return None;
        }
        Some(compose(input, &reply))
    }

    /// Prediction for a line ending inside option `name`, or `None` when
    /// the value is complete and the command should decide.
    fn predict_option(
        &self,
        command: &dyn Command,
        line: &ParsedLine,
        name: &str,
        input: &str,
        typing: bool,
    ) -> Option<Option<String>> {
        let known = OptionKey::parse(name).filter(|key| command.known_options().contains(key));
        let Some(key) = known else {
            let last = input.split_whitespace().last().unwrap_or_default();
            if !(typing && last.starts_with("--")) {
                return Some(None);
            }
            let completion = command
                .known_options()
                .iter()
                .find(|key| key.name().starts_with(name))
                .map(|key| compose(input, &format!("--{key}")));
            return Some(completion);
        };

        let value = line.options.get(name).map(String::as_str).unwrap_or_default();
        match key {
            OptionKey::Fg | OptionKey::Bg if create_color(value).is_err() => {
                let current = if key == OptionKey::Fg {
                    self.foreground
                } else {
                    self.background
                };
                let tokens: Vec<String> = value.split_whitespace().map(str::to_string).collect();
                let reply = predict_color(&tokens, current).map(|reply| {
                    if reply.is_empty() {
                        reply
                    } else {
                        compose(input, &reply)
                    }
                });
                Some(reply)
            }
            OptionKey::Outline if value.is_empty() => Some(Some(compose(input, " width"))),
            _ => None,
        }
    }
}

/// Append a reply starting with a space, otherwise replace the last token.
fn compose(input: &str, reply: &str) -> String {
    let trimmed = input.trim_end();
    if reply.starts_with(' ') {
        return format!("{trimmed}{reply}");
    }
    let head = match trimmed.rfind(char::is_whitespace) {
        Some(i) => &trimmed[..=i],
        None => "",
    };
    format!("{head}{reply}")
}
