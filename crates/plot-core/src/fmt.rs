// File: crates/plot-core/src/fmt.rs
// Summary: matplotlib-style format string parsing ("r--o" -> color/style/marker).

use crate::error::Error;
use crate::line::{Line2D, LineStyle, MarkerStyle};
use crate::types::Color;

/// Parsed pieces of a format string. Unset fields leave the line untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FormatSpec {
    pub color: Option<Color>,
    pub line_style: Option<LineStyle>,
    pub marker: Option<MarkerStyle>,
}

impl FormatSpec {
    pub fn apply(&self, line: &mut Line2D) {
        if let Some(color) = self.color {
            line.color = color;
            line.marker_color = color;
        }
        if let Some(style) = self.line_style {
            line.line_style = style;
        }
        if let Some(marker) = self.marker {
            line.marker = marker;
        }
    }
}

/// Single-letter color codes.
pub fn color_for_char(c: char) -> Option<Color> {
    match c {
        'b' => Some(Color::BLUE),
        'g' => Some(Color::GREEN),
        'r' => Some(Color::RED),
        'c' => Some(Color::CYAN),
        'm' => Some(Color::MAGENTA),
        'y' => Some(Color::YELLOW),
        'k' => Some(Color::BLACK),
        'w' => Some(Color::WHITE),
        _ => None,
    }
}

fn marker_for_char(c: char) -> Option<MarkerStyle> {
    match c {
        '.' => Some(MarkerStyle::Point),
        'o' => Some(MarkerStyle::Circle),
        's' => Some(MarkerStyle::Square),
        'd' | 'D' => Some(MarkerStyle::Diamond),
        '^' | 'v' => Some(MarkerStyle::Triangle),
        '+' => Some(MarkerStyle::Plus),
        'x' => Some(MarkerStyle::Cross),
        '*' => Some(MarkerStyle::Star),
        _ => None,
    }
}

/// Parse a format string such as `"r--o"`. Later occurrences of the same
/// component overwrite earlier ones; unknown characters are an error.
pub fn parse(fmt: &str) -> Result<FormatSpec, Error> {
    let mut spec = FormatSpec::default();
    let mut chars = fmt.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            // "--" and "-." are two-character styles.
            match chars.peek() {
                Some('-') => {
                    chars.next();
                    spec.line_style = Some(LineStyle::Dashed);
                }
                Some('.') => {
                    chars.next();
                    spec.line_style = Some(LineStyle::DashDot);
                }
                _ => spec.line_style = Some(LineStyle::Solid),
            }
            continue;
        }
        if c == ':' {
            spec.line_style = Some(LineStyle::Dotted);
            continue;
        }
        if let Some(color) = color_for_char(c) {
            spec.color = Some(color);
            continue;
        }
        if let Some(marker) = marker_for_char(c) {
            spec.marker = Some(marker);
            continue;
        }
        return Err(Error::FormatString(c));
    }
    Ok(spec)
}
