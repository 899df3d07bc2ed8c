//! Split a command line into name, positional arguments and options.

use std::collections::BTreeMap;

/// One tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLine {
    pub command: String,
    pub args: Vec<String>,
    /// Option name (without `--`) to its space-joined value tokens.
    pub options: BTreeMap<String, String>,
    /// Option that the final token belongs to, if the line ends inside the
    /// option region.
    pub last_option: Option<String>,
}

impl ParsedLine {
    /// Tokenize `input`. Blank input yields `None`.
    ///
    /// Everything before the first `--token` is positional. From there on,
    /// each `--name` opens an option and following plain tokens are joined
    /// into its value. Repeating an option overwrites it.
    pub fn parse(input: &str) -> Option<Self> {
        let mut tokens = input.split_whitespace();
        let command = tokens.next()?.to_string();

        let mut line = ParsedLine {
            command,
            ..Self::default()
        };
        let mut current: Option<(String, Vec<&str>)> = None;

        for token in tokens {
            if let Some(name) = token.strip_prefix("--") {
                if let Some((name, values)) = current.take() {
                    line.options.insert(name, values.join(" "));
                }
                current = Some((name.to_string(), Vec::new()));
            } else if let Some((_, values)) = current.as_mut() {
                values.push(token);
            } else {
                line.args.push(token.to_string());
            }
        }

        if let Some((name, values)) = current {
            line.options.insert(name.clone(), values.join(" "));
            line.last_option = Some(name);
        }
        Some(line)
    }
}
