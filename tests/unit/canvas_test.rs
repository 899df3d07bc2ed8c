//! Canvas raster, undo slot and image store

use tempfile::TempDir;
use termpaint::{Canvas, CanvasError, Color, ImageStore};

const RED: Color = Color::rgb(255, 0, 0);

#[test]
fn every_mutation_is_undoable_once() {
    let mut canvas = Canvas::new(8, 8, Color::BLACK);

    canvas.draw_line((0, 0), (7, 7), RED);
    canvas.undo().unwrap();
    assert_eq!(canvas.get_pixel(3, 3).unwrap(), Color::BLACK);
    assert!(matches!(canvas.undo(), Err(CanvasError::NothingToUndo)));

    canvas.draw_circle((4, 4, 2), Some(RED), None, 0);
    assert_eq!(canvas.get_pixel(4, 4).unwrap(), RED);
    canvas.undo().unwrap();
    assert_eq!(canvas.get_pixel(4, 4).unwrap(), Color::BLACK);
    assert_eq!(canvas.edits(), 0);
}

#[test]
fn rectangle_outline_is_drawn_inward() {
    let mut canvas = Canvas::new(10, 10, Color::BLACK);
    canvas.fill_rect((2, 2, 5, 5), Some(Color::WHITE), Some(RED), 1);
    assert_eq!(canvas.get_pixel(2, 2).unwrap(), RED);
    assert_eq!(canvas.get_pixel(6, 6).unwrap(), RED);
    assert_eq!(canvas.get_pixel(4, 4).unwrap(), Color::WHITE);
    assert_eq!(canvas.get_pixel(7, 7).unwrap(), Color::BLACK);
}

#[test]
fn transparent_fill_leaves_pixels_alone() {
    let mut canvas = Canvas::new(6, 6, Color::WHITE);
    canvas.fill_rect((0, 0, 6, 6), Some(RED.with_alpha(0)), None, 0);
    assert_eq!(canvas.get_pixel(3, 3).unwrap(), Color::WHITE);
    assert_eq!(canvas.edits(), 1);
}

#[test]
fn store_round_trips_png() {
    let temp = TempDir::new().unwrap();
    let store = ImageStore::new(temp.path().join("images"));

    let mut canvas = Canvas::new(5, 4, Color::BLACK);
    canvas.set_pixel(1, 1, RED).unwrap();
    canvas.save(&store, "dot.png").unwrap();

    let mut loaded = Canvas::new(1, 1, Color::WHITE);
    loaded.load(&store, "dot.png").unwrap();
    assert_eq!(loaded.size(), (5, 4));
    assert_eq!(loaded.get_pixel(1, 1).unwrap(), RED);
    assert_eq!(loaded.edits(), 0);

    let names: Vec<String> = store.list().unwrap().into_iter().map(|i| i.name).collect();
    assert_eq!(names, ["dot.png"]);
}

#[test]
fn missing_image_is_not_found() {
    let temp = TempDir::new().unwrap();
    let store = ImageStore::new(temp.path());
    let mut canvas = Canvas::new(2, 2, Color::BLACK);
    let err = canvas.load(&store, "nope.png").unwrap_err();
    assert_eq!(err.to_string(), "Image not found: nope.png");
    assert!(!canvas.undo_available());
}
