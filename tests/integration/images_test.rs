//! Saving, listing and loading images through commands

use super::helpers::{drain, errors, session, HEIGHT, WIDTH};
use tempfile::TempDir;
use termpaint::Color;

#[test]
fn save_refuses_to_clobber_without_overwrite() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    assert!(term.run_str("save_image one.png"));
    assert!(!term.run_str("save_image one.png"));
    assert_eq!(
        errors(&mut term),
        ["This image already exists, use --overwrite to overwrite it."]
    );
    assert!(term.run_str("save_image one.png --overwrite"));
}

#[test]
fn load_restores_pixels_and_is_undoable() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    assert!(term.run_str("draw_pixel 3 3 --fg gold"));
    assert!(term.run_str("save_image dot.png"));
    assert!(term.run_str("load_image default"));
    assert_eq!(term.canvas().get_pixel(3, 3).unwrap(), Color::BLACK);
    assert_eq!(term.canvas().size(), (WIDTH, HEIGHT));

    assert!(term.run_str("load_image dot.png"));
    assert_eq!(term.canvas().get_pixel(3, 3).unwrap(), Color::rgb(255, 215, 0));
    assert_eq!(term.canvas().edits(), 0);

    assert!(term.run_str("undo"));
    assert_eq!(term.canvas().get_pixel(3, 3).unwrap(), Color::BLACK);
}

#[test]
fn ls_lists_saved_files() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    assert!(term.run_str("ls"));
    let first = drain(&mut term);
    assert!(first[0].1.starts_with("No images in"));

    assert!(term.run_str("save_image b.png"));
    assert!(term.run_str("save_image a.png"));
    drain(&mut term);
    assert!(term.run_str("ls"));
    let lines: Vec<String> = drain(&mut term).into_iter().map(|(_, t)| t).collect();
    assert!(lines[0].starts_with("Files in"));
    assert!(lines[1].trim_start().starts_with("a.png"));
    assert!(lines[2].trim_start().starts_with("b.png"));
}

#[test]
fn image_info_reports_pixel_and_summary() {
    let temp = TempDir::new().unwrap();
    let mut term = session(&temp);

    assert!(term.run_str("draw_pixel 0 0 --fg red"));
    drain(&mut term);
    assert!(term.run_str("image_info 0 0"));
    let lines: Vec<String> = drain(&mut term).into_iter().map(|(_, t)| t).collect();
    assert_eq!(lines, ["Pixel info (x: 0 y: 0):", "Color: rgba(255, 0, 0, 255) #ff0000ff"]);

    assert!(term.run_str("image_info"));
    let lines: Vec<String> = drain(&mut term).into_iter().map(|(_, t)| t).collect();
    assert!(lines.contains(&format!("Size: {WIDTH}x{HEIGHT} pixels")));
    assert!(lines.contains(&"Edit count: 1".to_string()));
    assert!(lines.contains(&"Colors: 2".to_string()));
}
