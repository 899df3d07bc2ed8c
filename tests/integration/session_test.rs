//! End-to-end command sessions through `Terminal::run_str`

use super::helpers::{drain, errors, session, HEIGHT, WIDTH};
use tempfile::TempDir;
use termpaint::{Color, OutputKind};

#[test]
fn fg_then_draw_pixel_paints_red() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    assert!(term.run_str("fg rgb(255 0 0)"));
    assert!(term.run_str("draw_pixel 5 5"));
    assert_eq!(term.canvas().get_pixel(5, 5).unwrap(), Color::new(255, 0, 0, 255));
}

#[test]
fn bogus_background_keeps_previous_color() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    assert!(term.run_str("bg gold"));
    drain(&mut term);
    assert!(!term.run_str("bg bogus"));
    assert_eq!(errors(&mut term), ["Invalid color: `bogus`"]);
    assert_eq!(term.background(), Color::rgb(255, 215, 0));
}

#[test]
fn unknown_option_fails_before_mutation() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    assert!(!term.run_str("draw_pixel 1 1 --bogus x"));
    let errors = errors(&mut term);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("bogus"));
    assert_eq!(term.canvas().get_pixel(1, 1).unwrap(), Color::BLACK);
    assert!(!term.canvas().undo_available());
}

#[test]
fn undo_succeeds_exactly_once() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    assert!(term.run_str("draw_line 0 0 10 10"));
    assert!(term.run_str("undo"));
    assert!(!term.run_str("undo"));
    assert_eq!(errors(&mut term), ["Cannot be undone."]);
    assert_eq!(term.canvas().get_pixel(5, 5).unwrap(), Color::BLACK);
}

#[test]
fn coordinates_are_bounded_by_canvas() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    assert!(!term.run_str(&format!("draw_pixel {WIDTH} 0")));
    assert!(!term.run_str(&format!("draw_pixel 0 {HEIGHT}")));
    assert!(term.run_str(&format!("draw_pixel {} {}", WIDTH - 1, HEIGHT - 1)));
    assert_eq!(term.canvas().edits(), 1);
}

#[test]
fn polygon_needs_three_points() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    assert!(!term.run_str("draw_polygon 0 0 1 1"));
    assert_eq!(
        errors(&mut term),
        ["Bad amount of arguments, see help for options"]
    );
    assert!(term.run_str("draw_polygon 0 0 1 1 2 2"));
}

#[test]
fn shapes_use_default_colors_and_overrides() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    assert!(term.run_str("bg blue"));
    assert!(term.run_str("draw_rectangle 0 0 6 6 --fg lime --outline 1"));
    assert_eq!(term.canvas().get_pixel(0, 0).unwrap(), Color::rgb(0, 0, 255));
    assert_eq!(term.canvas().get_pixel(2, 2).unwrap(), Color::rgb(0, 255, 0));

    assert!(term.run_str("draw_circle 20 8 3 --no-fill --outline 1 --bg red"));
    assert_eq!(term.canvas().get_pixel(20, 8).unwrap(), Color::BLACK);
    assert_eq!(term.canvas().get_pixel(23, 8).unwrap(), Color::rgb(255, 0, 0));
    assert_eq!(term.background(), Color::rgb(0, 0, 255));
}

#[test]
fn every_rejection_explains_itself() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    for line in [
        "nope",
        "draw_pixel",
        "draw_pixel a b",
        "draw_circle 1 1 -2",
        "draw_rectangle 0 0 -1 3",
        "help nope",
        "fg",
        "load_image missing.png",
        "save_image bad-name.png",
    ] {
        assert!(!term.run_str(line), "{line}");
        assert!(!errors(&mut term).is_empty(), "{line}");
    }
}

#[test]
fn every_success_reports_once() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    for line in [
        "ping",
        "fg red",
        "draw_pixel 1 1",
        "draw_line 0 0 3 3",
        "draw_polygon 0 0 4 0 4 4",
        "undo",
        "terminal_background #101030",
        "save_image pic.png",
        "load_image pic.png",
    ] {
        assert!(term.run_str(line), "{line}");
        let lines = drain(&mut term);
        let successes = lines
            .iter()
            .filter(|(kind, _)| *kind == OutputKind::Success)
            .count();
        assert_eq!(successes, 1, "{line}: {lines:?}");
    }
}

#[test]
fn help_lists_sorted_commands() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    assert!(term.run_str("help"));
    let text: Vec<String> = drain(&mut term).into_iter().map(|(_, t)| t).collect();
    insta::assert_snapshot!(text.join("\n"), @r"
    Available commands:
    bg, draw_circle, draw_line, draw_pixel, draw_polygon, draw_rectangle, fg, help, image_info, load_image, ls, ping, save_image, terminal_background, undo
    For more information on a command use `help <command>`.
    ");
}

#[test]
fn history_records_successful_lines() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    term.run_str("draw_pixel 1 1");
    term.run_str("draw_pixel 99 99");
    term.run_str("ping");
    assert_eq!(term.history_previous().as_deref(), Some("ping"));
    assert_eq!(term.history_previous().as_deref(), Some("draw_pixel 1 1"));
    assert_eq!(term.history_next().as_deref(), Some("ping"));
}
