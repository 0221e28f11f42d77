// File: crates/plot-core/src/axes.rs
// Summary: Axes artist: a sub-region of a figure hosting lines, grid, and labels.

use crate::artist::{Artist, ArtistBase, DrawContext, Drawable};
use crate::error::Error;
use crate::geometry::PointPx;
use crate::line::Line2D;
use crate::renderer::{Renderer, Stroke};
use crate::ticks::linspace;
use crate::types::{Color, RectF};

const FRAME_COLOR: Color = Color::from_rgb(60, 60, 70);
const GRID_COLOR: Color = Color::from_rgb(230, 230, 235);
const TEXT_COLOR: Color = Color::from_rgb(20, 20, 30);
const GRID_COLS: usize = 10;
const GRID_ROWS: usize = 6;
const LABEL_SIZE: f32 = 14.0;
const TITLE_SIZE: f32 = 16.0;

/// A rectangular sub-region of a figure with its own data coordinate space.
pub struct Axes {
    base: ArtistBase,
    rect: RectF,
    lines: Vec<Line2D>,
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub grid: bool,
    pub legend: bool,
    /// Explicit X data range; autoscaled from the lines when `None`.
    pub xlim: Option<(f64, f64)>,
    /// Explicit Y data range; autoscaled from the lines when `None`.
    pub ylim: Option<(f64, f64)>,
}

impl Axes {
    pub(crate) fn new(rect: RectF) -> Self {
        Self {
            base: ArtistBase::new(),
            rect,
            lines: Vec::new(),
            title: None,
            xlabel: None,
            ylabel: None,
            grid: false,
            legend: false,
            xlim: None,
            ylim: None,
        }
    }

    /// Normalized position within the owning figure.
    pub fn rect(&self) -> RectF {
        self.rect
    }

    pub fn set_rect(&mut self, rect: RectF) {
        self.rect = rect;
    }

    /// Attach a line and hand back a mutable borrow of it.
    pub fn add_line(&mut self, line: Line2D) -> &mut Line2D {
        self.lines.push(line);
        let idx = self.lines.len() - 1;
        &mut self.lines[idx]
    }

    pub fn lines(&self) -> &[Line2D] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut [Line2D] {
        &mut self.lines
    }

    /// Data ranges for the draw pass: explicit limits win, otherwise the
    /// union extent of visible lines with a 2% vertical margin. Degenerate
    /// spans widen by one unit; no data at all maps to the unit square.
    pub fn data_ranges(&self) -> ((f64, f64), (f64, f64)) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for line in self.lines.iter().filter(|l| l.visible()) {
            if let Some(e) = line.extent() {
                x_min = x_min.min(e.x_min);
                x_max = x_max.max(e.x_max);
                y_min = y_min.min(e.y_min);
                y_max = y_max.max(e.y_max);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() {
            x_min = 0.0;
            x_max = 1.0;
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            y_min = 0.0;
            y_max = 1.0;
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let y_margin = (y_max - y_min) * 0.02;
        let x_range = self.xlim.unwrap_or((x_min, x_max));
        let y_range = self.ylim.unwrap_or((y_min - y_margin, y_max + y_margin));
        (x_range, y_range)
    }

    fn draw_frame(&self, renderer: &mut dyn Renderer, ctx: &DrawContext) {
        let r = ctx.region;
        let corners = [
            PointPx::new(r.left, r.top),
            PointPx::new(r.right, r.top),
            PointPx::new(r.right, r.bottom),
            PointPx::new(r.left, r.bottom),
            PointPx::new(r.left, r.top),
        ];
        renderer.stroke_polyline(&corners, &Stroke::solid(FRAME_COLOR, 1.5));
    }

    fn draw_grid(&self, renderer: &mut dyn Renderer, ctx: &DrawContext) {
        let r = ctx.region;
        let stroke = Stroke::solid(GRID_COLOR, 1.0);
        for x in linspace(r.left as f64, r.right as f64, GRID_COLS) {
            let x = x as f32;
            renderer.stroke_polyline(
                &[PointPx::new(x, r.top), PointPx::new(x, r.bottom)],
                &stroke,
            );
        }
        for y in linspace(r.top as f64, r.bottom as f64, GRID_ROWS) {
            let y = y as f32;
            renderer.stroke_polyline(
                &[PointPx::new(r.left, y), PointPx::new(r.right, y)],
                &stroke,
            );
        }
    }

    fn draw_labels(&self, renderer: &mut dyn Renderer, ctx: &DrawContext) {
        let r = ctx.region;
        if let Some(title) = &self.title {
            renderer.draw_text(
                PointPx::new(r.center_x(), r.top - 10.0),
                title,
                TITLE_SIZE,
                TEXT_COLOR,
            );
        }
        if let Some(xlabel) = &self.xlabel {
            renderer.draw_text(
                PointPx::new(r.center_x(), r.bottom + 24.0),
                xlabel,
                LABEL_SIZE,
                TEXT_COLOR,
            );
        }
        if let Some(ylabel) = &self.ylabel {
            renderer.draw_text(
                PointPx::new(r.left - 40.0, r.center_y()),
                ylabel,
                LABEL_SIZE,
                TEXT_COLOR,
            );
        }
    }

    fn draw_legend(&self, renderer: &mut dyn Renderer, ctx: &DrawContext) {
        let r = ctx.region;
        let mut y = r.top + 16.0;
        for line in self.lines.iter().filter(|l| l.visible()) {
            if let Some(label) = line.label() {
                renderer.draw_text(
                    PointPx::new(r.right - 96.0, y),
                    label,
                    LABEL_SIZE,
                    line.color,
                );
                y += LABEL_SIZE + 4.0;
            }
        }
    }
}

impl Artist for Axes {
    fn base(&self) -> &ArtistBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut ArtistBase {
        &mut self.base
    }
}

impl Drawable for Axes {
    fn draw(&self, renderer: &mut dyn Renderer, ctx: &DrawContext) -> Result<(), Error> {
        if !self.base.visible {
            return Ok(());
        }

        self.draw_frame(renderer, ctx);
        if self.grid {
            self.draw_grid(renderer, ctx);
        }

        let (x_range, y_range) = self.data_ranges();
        let line_ctx = DrawContext { region: ctx.region, x_range, y_range };

        // Stable sort keeps insertion order among equal zorders.
        let mut order: Vec<usize> = (0..self.lines.len()).collect();
        order.sort_by_key(|&i| self.lines[i].zorder());
        for i in order {
            self.lines[i].draw(renderer, &line_ctx)?;
        }

        self.draw_labels(renderer, ctx);
        if self.legend {
            self.draw_legend(renderer, ctx);
        }
        Ok(())
    }
}
