use clickripple::{clamp, color_to_hex, parse_hex_color};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn color_to_hex_without_alpha_when_opaque() {
    assert_eq!(color_to_hex(1.0, 0.0, 0.5, 1.0), "#FF0080");
}

#[test]
fn color_to_hex_with_alpha_when_not_opaque() {
    assert_eq!(color_to_hex(0.2, 0.4, 0.6, 0.5), "#33669980");
}

#[test]
fn color_to_hex_clamps_input() {
    assert_eq!(color_to_hex(-0.1, 1.2, 0.501, 1.0), "#00FF80");
}

#[test]
fn parse_hex_ring_color() {
    let (r, g, b, a) = parse_hex_color("#26F7FF").expect("valid rgb hex");
    assert!(approx_eq(r, 0x26 as f64 / 255.0));
    assert!(approx_eq(g, 0xF7 as f64 / 255.0));
    assert!(approx_eq(b, 1.0));
    assert!(approx_eq(a, 1.0));
}

#[test]
fn parse_hex_rgba() {
    let (r, g, b, a) = parse_hex_color("#33669980").expect("valid rgba hex");
    assert!(approx_eq(r, 51.0 / 255.0));
    assert!(approx_eq(g, 102.0 / 255.0));
    assert!(approx_eq(b, 153.0 / 255.0));
    assert!(approx_eq(a, 128.0 / 255.0));
}

#[test]
fn parse_hex_trims_and_ignores_whitespace() {
    let (r, g, b, a) = parse_hex_color("  8afdFF50  ").expect("valid with whitespace and mixed case");
    assert!(approx_eq(r, 138.0 / 255.0));
    assert!(approx_eq(g, 253.0 / 255.0));
    assert!(approx_eq(b, 1.0));
    assert!(approx_eq(a, 80.0 / 255.0));
}

#[test]
fn parse_hex_invalid_lengths_return_none() {
    assert!(parse_hex_color("#FFF").is_none());
    assert!(parse_hex_color("#FF00").is_none());
    assert!(parse_hex_color("#FF00FF0000").is_none());
}

#[test]
fn parse_hex_invalid_chars_return_none() {
    assert!(parse_hex_color("#GG0000").is_none());
    assert!(parse_hex_color("ZZZZZZZZ").is_none());
    assert!(parse_hex_color("#ÄÄÄ").is_none());
}
