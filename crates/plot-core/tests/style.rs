// File: crates/plot-core/tests/style.rs
// Purpose: Validate format-string parsing and its application to lines.

use plot_core::{fmt, Color, Error, Line2D, LineStyle, MarkerStyle};

#[test]
fn parse_full_spec() {
    let spec = fmt::parse("r--o").expect("valid format");
    assert_eq!(spec.color, Some(Color::RED));
    assert_eq!(spec.line_style, Some(LineStyle::Dashed));
    assert_eq!(spec.marker, Some(MarkerStyle::Circle));
}

#[test]
fn parse_partial_specs() {
    let spec = fmt::parse("g:").expect("valid format");
    assert_eq!(spec.color, Some(Color::GREEN));
    assert_eq!(spec.line_style, Some(LineStyle::Dotted));
    assert_eq!(spec.marker, None);

    let spec = fmt::parse("-.").expect("valid format");
    assert_eq!(spec.line_style, Some(LineStyle::DashDot));
    assert_eq!(spec.color, None);

    let spec = fmt::parse("k").expect("valid format");
    assert_eq!(spec.color, Some(Color::BLACK));
    assert_eq!(spec.line_style, None);

    let spec = fmt::parse("").expect("empty is a no-op");
    assert_eq!(spec, fmt::FormatSpec::default());
}

#[test]
fn marker_only_specs() {
    for (text, marker) in [
        (".", MarkerStyle::Point),
        ("s", MarkerStyle::Square),
        ("D", MarkerStyle::Diamond),
        ("^", MarkerStyle::Triangle),
        ("v", MarkerStyle::Triangle),
        ("+", MarkerStyle::Plus),
        ("x", MarkerStyle::Cross),
        ("*", MarkerStyle::Star),
    ] {
        let spec = fmt::parse(text).expect("valid marker");
        assert_eq!(spec.marker, Some(marker), "for {text:?}");
    }
}

#[test]
fn unknown_character_is_rejected() {
    let err = fmt::parse("r!?").unwrap_err();
    assert!(matches!(err, Error::FormatString('!')));
}

#[test]
fn apply_overrides_only_parsed_fields() {
    let mut line = Line2D::new(vec![0.0, 1.0], vec![0.0, 1.0]).expect("valid data");
    line.marker_size = 12.0;

    let spec = fmt::parse("m-.").expect("valid format");
    spec.apply(&mut line);

    assert_eq!(line.color, Color::MAGENTA);
    assert_eq!(line.marker_color, Color::MAGENTA);
    assert_eq!(line.line_style, LineStyle::DashDot);
    // Marker left alone: the spec named none.
    assert_eq!(line.marker, MarkerStyle::None);
    assert_eq!(line.marker_size, 12.0);
}
