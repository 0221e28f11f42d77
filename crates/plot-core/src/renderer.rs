// File: crates/plot-core/src/renderer.rs
// Summary: Renderer/Backend seams plus a command-recording renderer for tests and demos.

use std::path::Path;

use crate::error::Error;
use crate::figure::Figure;
use crate::geometry::{PointPx, RectPx};
use crate::line::MarkerStyle;
use crate::types::Color;

/// Stroke style for polyline primitives, in device units.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    /// Alternating on/off dash lengths in device pixels; `None` strokes solid.
    pub dash: Option<Vec<f32>>,
}

impl Stroke {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }
}

/// Drawing target. All coordinates are device pixels; the scene graph performs
/// every data-to-device transform before calling in.
pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: RectPx, color: Color);
    fn stroke_polyline(&mut self, points: &[PointPx], stroke: &Stroke);
    fn draw_markers(&mut self, points: &[PointPx], marker: MarkerStyle, size: f32, color: Color);
    fn draw_text(&mut self, pos: PointPx, text: &str, size: f32, color: Color);
}

/// One recorded drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    Clear(Color),
    FillRect { rect: RectPx, color: Color },
    Polyline { points: Vec<PointPx>, stroke: Stroke },
    Markers { points: Vec<PointPx>, marker: MarkerStyle, size: f32, color: Color },
    Text { pos: PointPx, text: String, size: f32, color: Color },
}

/// Renderer that records primitives in draw order instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RenderList {
    fn clear(&mut self, color: Color) {
        self.commands.push(RenderCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: RectPx, color: Color) {
        self.commands.push(RenderCommand::FillRect { rect, color });
    }

    fn stroke_polyline(&mut self, points: &[PointPx], stroke: &Stroke) {
        self.commands.push(RenderCommand::Polyline {
            points: points.to_vec(),
            stroke: stroke.clone(),
        });
    }

    fn draw_markers(&mut self, points: &[PointPx], marker: MarkerStyle, size: f32, color: Color) {
        self.commands.push(RenderCommand::Markers {
            points: points.to_vec(),
            marker,
            size,
            color,
        });
    }

    fn draw_text(&mut self, pos: PointPx, text: &str, size: f32, color: Color) {
        self.commands.push(RenderCommand::Text {
            pos,
            text: text.to_string(),
            size,
            color,
        });
    }
}

/// Options controlling figure export.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveOptions {
    /// Target file format, e.g. "png".
    pub format: String,
    /// Override for the figure's own dpi.
    pub dpi: Option<f64>,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self { format: "png".to_string(), dpi: None }
    }
}

/// Export collaborator: renders a figure and writes the result to disk.
/// The core crate ships no encoder; backends plug in from outside.
pub trait Backend {
    fn name(&self) -> &str;
    fn save(&mut self, figure: &Figure, path: &Path, opts: &SaveOptions) -> Result<(), Error>;
}
