// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (figure sizes, colors, normalized rects).

/// Default figure width in inches.
pub const FIG_WIDTH_IN: f64 = 8.0;
/// Default figure height in inches.
pub const FIG_HEIGHT_IN: f64 = 6.0;
/// Default figure resolution in dots per inch.
pub const DEFAULT_DPI: f64 = 100.0;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const BLUE: Color = Color::from_rgb(31, 119, 180);
    pub const GREEN: Color = Color::from_rgb(44, 160, 44);
    pub const RED: Color = Color::from_rgb(214, 39, 40);
    pub const CYAN: Color = Color::from_rgb(23, 190, 207);
    pub const MAGENTA: Color = Color::from_rgb(227, 119, 194);
    pub const YELLOW: Color = Color::from_rgb(188, 189, 34);
}

/// Figure size in inches (width x height).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeF {
    pub width: f64,
    pub height: f64,
}

impl SizeF {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for SizeF {
    fn default() -> Self {
        Self::new(FIG_WIDTH_IN, FIG_HEIGHT_IN)
    }
}

/// Normalized rectangle within a figure, bottom-left origin.
/// Values are not clamped to [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Full-canvas rectangle.
    pub const fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }
}
