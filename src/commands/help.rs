//! `help [command [page]]`

use crate::terminal::Terminal;

use super::args::is_digits;
use super::{Command, CommandOptions};

pub struct Help;

impl Help {
    fn list(terminal: &mut Terminal) {
        let names: Vec<&str> = terminal.registry().names().collect();
        terminal.output_info("Available commands:");
        terminal.output_info(names.join(", "));
        terminal.output_info("For more information on a command use `help <command>`.");
    }
}

impl Command for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn help_pages(&self) -> &'static [&'static str] {
        &["Usage: help [command [page]]\n\nWithout arguments lists every command.\nWith a command shows its help. Long help has several pages: repeat\n`help <command>` to see the next one, or ask for a page number."]
    }

    fn execute(&self, terminal: &mut Terminal, args: &[String], _options: &CommandOptions) -> bool {
        let (name, page) = match args {
            [] => {
                Self::list(terminal);
                return true;
            }
            [name] => (name, None),
            [name, page] => {
                let Some(page) = is_digits(page).then(|| page.parse::<usize>().ok()).flatten() else {
                    terminal.output_error("The page must be a positive integer.");
                    return false;
                };
                (name, Some(page))
            }
            _ => {
                terminal.output_error("Too many arguments.");
                return false;
            }
        };

        let Some(command) = terminal.registry().get(name) else {
            terminal.output_error(format!("`{name}` is not a valid command."));
            terminal.output_error("Use `help` to see a list of available commands.");
            return false;
        };

        let pages = command.help_pages();
        let page = page.unwrap_or_else(|| terminal.next_help_page(name, pages.len()));
        if page == 0 || page > pages.len() {
            terminal.output_error(format!("`{name}` has no page {page}."));
            return false;
        }

        terminal.output_info(format!("Help for `{name}`, page {page}/{}", pages.len()));
        for line in pages[page - 1].lines() {
            terminal.output_info(line);
        }
        terminal.record_help_page(name, page);
        true
    }

    fn predict(&self, terminal: &Terminal, args: &[String], _options: &CommandOptions) -> Option<String> {
        match args {
            [] => Some(" command".to_string()),
            [name] if terminal.registry().contains(name) => Some(" page".to_string()),
            [prefix] => terminal.registry().complete(prefix).map(str::to_string),
            [name, page] => {
                let pages = terminal.registry().get(name)?.help_pages().len();
                let page: usize = page.parse().ok()?;
                (1..=pages).contains(&page).then(String::new)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{terminal, texts};

    #[test]
    fn lists_sorted_commands() {
        let (mut term, _dir) = terminal();
        assert!(term.run_str("help"));
        let lines = texts(&mut term);
        assert_eq!(lines[0], "Available commands:");
        assert_eq!(
            lines[1],
            "bg, draw_circle, draw_line, draw_pixel, draw_polygon, draw_rectangle, fg, help, \
             image_info, load_image, ls, ping, save_image, terminal_background, undo"
        );
    }

    #[test]
    fn repeated_help_pages_through() {
        let (mut term, _dir) = terminal();
        assert!(term.run_str("help draw_pixel"));
        assert!(texts(&mut term)[0].ends_with("page 1/2"));
        assert!(term.run_str("help draw_pixel"));
        assert!(texts(&mut term)[0].ends_with("page 2/2"));
        assert!(term.run_str("help draw_pixel"));
        assert!(texts(&mut term)[0].ends_with("page 1/2"));
    }

    #[test]
    fn explicit_page_and_errors() {
        let (mut term, _dir) = terminal();
        assert!(term.run_str("help draw_pixel 2"));
        term.drain_output();
        assert!(!term.run_str("help draw_pixel 3"));
        assert!(!term.run_str("help draw_pixel x"));
        assert!(!term.run_str("help nope"));
        assert!(!term.run_str("help a b c"));
        let lines = texts(&mut term);
        assert_eq!(lines[0], "`draw_pixel` has no page 3.");
        assert_eq!(lines[1], "The page must be a positive integer.");
        assert_eq!(lines[2], "`nope` is not a valid command.");
        assert_eq!(lines[4], "Too many arguments.");
    }

    #[test]
    fn predicts_command_names() {
        let (term, _dir) = terminal();
        assert_eq!(term.predict_command("help").as_deref(), Some("help command"));
        assert_eq!(term.predict_command("help dra").as_deref(), Some("help draw_circle"));
        assert_eq!(term.predict_command("help undo 1").as_deref(), Some(""));
        assert_eq!(term.predict_command("help undo 2"), None);
    }
}
