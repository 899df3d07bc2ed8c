//! Config loading and validation

use super::helpers::temp_config;
use termpaint::{Color, Config, Terminal};

#[test]
fn partial_file_keeps_defaults() {
    let (_dir, path) = temp_config("[canvas]\nwidth = 64\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.canvas.width, 64);
    assert_eq!(config.canvas.height, 250);
    assert_eq!(config.colors.foreground, "white");
}

#[test]
fn missing_file_yields_defaults() {
    let (dir, _path) = temp_config("");
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn invalid_color_is_rejected() {
    let (_dir, path) = temp_config("[colors]\nforeground = \"not-a-color\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
fn terminal_uses_configured_colors_and_size() {
    let (dir, path) = temp_config(
        "[canvas]\nwidth = 12\nheight = 7\nbackground = \"navy\"\n\n[colors]\nforeground = \"gold\"\n",
    );
    let mut config = Config::load_from(&path).unwrap();
    config.storage.directory = dir.path().join("images").display().to_string();

    let term = Terminal::from_config(&config).unwrap();
    assert_eq!(term.canvas().size(), (12, 7));
    assert_eq!(term.canvas().get_pixel(0, 0).unwrap(), Color::rgb(0, 0, 128));
    assert_eq!(term.foreground(), Color::rgb(255, 215, 0));
    assert_eq!(term.background(), Color::BLACK);
    assert_eq!(term.store().directory(), dir.path().join("images"));
}
