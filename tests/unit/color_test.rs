//! Color model and parser properties

use termpaint::{create_color, Color, ColorError};

#[test]
fn hex_round_trip_over_rgb_grid() {
    for r in (0..=255u8).step_by(17) {
        for g in (0..=255u8).step_by(15) {
            for b in (0..=255u8).step_by(51) {
                let color = Color::rgb(r, g, b);
                let parsed = create_color(&color.hex()).unwrap();
                assert_eq!(parsed.rgb_tuple(), (r, g, b));
                assert_eq!(parsed.a, 255);
            }
        }
    }
}

#[test]
fn short_hex_defaults_alpha_to_opaque() {
    assert_eq!(create_color("#123").unwrap().a, 255);
    assert_eq!(create_color("#112233").unwrap().a, 255);
}

#[test]
fn achromatic_colors_have_no_hue_or_saturation() {
    for v in 0..=255u8 {
        let hsv = Color::rgb(v, v, v).hsv();
        assert_eq!(hsv.s, 0.0, "saturation of gray {v}");
        assert_eq!(hsv.h, 0.0, "hue of gray {v}");
    }
}

#[test]
fn hsv_value_is_a_percentage() {
    assert_eq!(Color::WHITE.hsv().v, 100.0);
    assert_eq!(Color::BLACK.hsv().v, 0.0);
}

#[test]
fn out_of_range_channels_are_named() {
    for (spec, message) in [
        ("rgb(256,0,0)", "r must be between 0 and 255: 256"),
        ("rgb(-1,0,0)", "r must be between 0 and 255: -1"),
        ("rgb(0 999 0)", "g must be between 0 and 255: 999"),
        ("hsv(361, 0, 0)", "h must be between 0 and 360: 361"),
    ] {
        let err = create_color(spec).unwrap_err();
        assert!(matches!(err, ColorError::OutOfRange { .. }), "{spec}");
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn garbage_is_an_invalid_color() {
    let err = create_color("bogus").unwrap_err();
    assert_eq!(err, ColorError::InvalidColor("bogus".to_string()));
    assert_eq!(err.to_string(), "Invalid color: `bogus`");
}

#[test]
fn from_str_matches_create_color() {
    let parsed: Color = "rgba(1, 2, 3, 4)".parse().unwrap();
    assert_eq!(parsed, Color::new(1, 2, 3, 4));
}
