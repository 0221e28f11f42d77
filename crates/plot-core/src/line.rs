// File: crates/plot-core/src/line.rs
// Summary: Line2D artist: paired coordinate data with line and marker styles.

use crate::artist::{Artist, ArtistBase, DrawContext, Drawable};
use crate::error::Error;
use crate::geometry::PointPx;
use crate::renderer::{Renderer, Stroke};
use crate::types::Color;

/// Line stroke pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
    None,
}

impl LineStyle {
    /// Alternating on/off dash lengths in device pixels; `None` for solid
    /// strokes (and for `LineStyle::None`, which draws nothing at all).
    pub fn dash_pattern(&self) -> Option<&'static [f32]> {
        match self {
            LineStyle::Solid | LineStyle::None => None,
            LineStyle::Dashed => Some(&[6.0, 4.0]),
            LineStyle::Dotted => Some(&[1.5, 3.0]),
            LineStyle::DashDot => Some(&[6.0, 3.0, 1.5, 3.0]),
        }
    }
}

/// Marker glyph drawn at each data point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerStyle {
    None,
    Point,
    Circle,
    Square,
    Diamond,
    Triangle,
    Plus,
    Cross,
    Star,
}

/// Data extent of a line, used for axes autoscaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataExtent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

#[derive(Debug)]
pub struct Line2D {
    base: ArtistBase,
    x: Vec<f64>,
    y: Vec<f64>,
    pub color: Color,
    pub line_width: f32,
    pub line_style: LineStyle,
    pub marker: MarkerStyle,
    pub marker_size: f32,
    pub marker_color: Color,
}

impl Line2D {
    /// Construct from paired coordinate sequences. Lengths must match.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, Error> {
        if x.len() != y.len() {
            return Err(Error::DataLength { x_len: x.len(), y_len: y.len() });
        }
        Ok(Self {
            base: ArtistBase::new(),
            x,
            y,
            color: Color::BLUE,
            line_width: 1.0,
            line_style: LineStyle::Solid,
            marker: MarkerStyle::None,
            marker_size: 6.0,
            marker_color: Color::BLUE,
        })
    }

    pub fn x_data(&self) -> &[f64] {
        &self.x
    }

    pub fn y_data(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Replace both coordinate sequences wholesale. Lengths must match;
    /// on error the existing data is left untouched.
    pub fn set_data(&mut self, x: Vec<f64>, y: Vec<f64>) -> Result<(), Error> {
        if x.len() != y.len() {
            return Err(Error::DataLength { x_len: x.len(), y_len: y.len() });
        }
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Bounding extent over finite points, or `None` for empty data.
    pub fn extent(&self) -> Option<DataExtent> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for (&x, &y) in self.x.iter().zip(&self.y) {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return None;
        }
        Some(DataExtent { x_min, x_max, y_min, y_max })
    }
}

impl Artist for Line2D {
    fn base(&self) -> &ArtistBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut ArtistBase {
        &mut self.base
    }
}

impl Drawable for Line2D {
    fn draw(&self, renderer: &mut dyn Renderer, ctx: &DrawContext) -> Result<(), Error> {
        if !self.base.visible || self.x.is_empty() {
            return Ok(());
        }

        let region = ctx.region;
        let x_span = (ctx.x_range.1 - ctx.x_range.0).max(1e-9);
        let y_span = (ctx.y_range.1 - ctx.y_range.0).max(1e-9);
        let sx = |x: f64| -> f32 {
            region.left + ((x - ctx.x_range.0) / x_span) as f32 * region.width()
        };
        let sy = |y: f64| -> f32 {
            region.bottom - ((y - ctx.y_range.0) / y_span) as f32 * region.height()
        };

        let points: Vec<PointPx> = self
            .x
            .iter()
            .zip(&self.y)
            .map(|(&x, &y)| PointPx::new(sx(x), sy(y)))
            .collect();

        if self.line_style != LineStyle::None && points.len() >= 2 {
            let stroke = Stroke {
                color: self.color,
                width: self.line_width,
                dash: self.line_style.dash_pattern().map(|d| d.to_vec()),
            };
            renderer.stroke_polyline(&points, &stroke);
        }

        if self.marker != MarkerStyle::None {
            renderer.draw_markers(&points, self.marker, self.marker_size, self.marker_color);
        }

        Ok(())
    }
}
