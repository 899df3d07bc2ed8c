//! Completion predictions through `Terminal::predict_command`

use super::helpers::session;
use tempfile::TempDir;

#[test]
fn completes_partial_command_name() {
    let temp = TempDir::new().unwrap();
    let term = session(&temp);
    assert_eq!(term.predict_command("draw_pi").as_deref(), Some("draw_pixel"));
    assert_eq!(term.predict_command("draw_").as_deref(), Some("draw_circle"));
    assert_eq!(term.predict_command("zzz"), None);
}

#[test]
fn suggests_next_argument() {
    let temp = TempDir::new().unwrap();
    let term = session(&temp);
    assert_eq!(term.predict_command("draw_pixel 1").as_deref(), Some("draw_pixel 1 y"));
    assert_eq!(term.predict_command("draw_pixel 1 2").as_deref(), Some(""));
}

#[test]
fn prediction_does_not_touch_state() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);
    term.predict_command("draw_pixel 1 1");
    term.predict_command("fg re");
    assert!(term.drain_output().is_empty());
    assert_eq!(term.canvas().edits(), 0);
    assert!(term.history().is_empty());
}

#[test]
fn color_arguments_follow_current_foreground() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);
    assert!(term.run_str("fg 10 20 30 40"));
    assert_eq!(term.predict_command("fg 1").as_deref(), Some("fg 1 20"));
    assert_eq!(term.predict_command("fg 1 2 3").as_deref(), Some("fg 1 2 3 40"));
    assert_eq!(term.predict_command("fg ma").as_deref(), Some("fg magenta"));
}

#[test]
fn completes_options_and_their_colors() {
    let temp = TempDir::new().unwrap();
    let term = session(&temp);
    assert_eq!(
        term.predict_command("draw_rectangle 0 0 4 4 --out").as_deref(),
        Some("draw_rectangle 0 0 4 4 --outline")
    );
    assert_eq!(
        term.predict_command("draw_line 0 0 4 4 --fg na").as_deref(),
        Some("draw_line 0 0 4 4 --fg navy")
    );
    assert_eq!(term.predict_command("draw_line 0 0 4 4 --bg na"), None);
}

#[test]
fn save_and_load_suggest_stored_names() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);
    assert_eq!(term.predict_command("save_image cat").as_deref(), Some("save_image cat.png"));
    assert!(term.run_str("save_image cat.png"));
    assert_eq!(
        term.predict_command("save_image ca").as_deref(),
        Some("save_image cat.png --overwrite")
    );
    assert_eq!(term.predict_command("load_image ca").as_deref(), Some("load_image cat.png"));
}
