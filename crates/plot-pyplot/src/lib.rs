// File: crates/plot-pyplot/src/lib.rs
// Summary: Session-scoped procedural facade mirroring the pyplot surface.

use std::collections::HashMap;
use std::path::Path;

use plot_core::{
    fmt, Artist, Axes, Backend, Color, Error, Figure, Line2D, MarkerStyle, RectF, SaveOptions,
    SizeF, Value,
};
use plot_rc::RcParams;

/// Options for [`Session::scatter`], with pyplot-style defaults
/// (size 20, circle marker).
#[derive(Clone, Debug)]
pub struct ScatterOptions {
    pub size: f32,
    pub color: Option<Color>,
    pub marker: MarkerStyle,
    pub label: Option<String>,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            size: 20.0,
            color: None,
            marker: MarkerStyle::Circle,
            label: None,
        }
    }
}

/// Explicit replacement for the global "current figure" singleton: the caller
/// owns a session, and every convenience call targets its current figure,
/// lazily created on first access.
pub struct Session {
    figure: Option<Figure>,
    rc: RcParams,
    backends: HashMap<String, Box<dyn Backend>>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_rc(RcParams::new())
    }

    pub fn with_rc(rc: RcParams) -> Self {
        Self {
            figure: None,
            rc,
            backends: HashMap::new(),
        }
    }

    pub fn rc(&self) -> &RcParams {
        &self.rc
    }

    pub fn rc_mut(&mut self) -> &mut RcParams {
        &mut self.rc
    }

    /// Replace the current figure with a fresh one; unspecified size/dpi fall
    /// back to the rc defaults.
    pub fn figure(&mut self, figsize: Option<SizeF>, dpi: Option<f64>) -> &mut Figure {
        let mut fig = figure_from_rc(&self.rc);
        if let Some(size) = figsize {
            fig.size = size;
        }
        if let Some(dpi) = dpi {
            fig.dpi = dpi;
        }
        log::debug!(
            "new current figure: {}x{} in at {} dpi",
            fig.size.width,
            fig.size.height,
            fig.dpi,
        );
        self.figure.insert(fig)
    }

    /// The implicit target of the convenience calls, created on first access.
    pub fn current_figure(&mut self) -> &mut Figure {
        let rc = &self.rc;
        self.figure.get_or_insert_with(|| figure_from_rc(rc))
    }

    /// Clear the current figure's axes.
    pub fn clf(&mut self) {
        self.current_figure().clear();
    }

    /// Drop the current figure; the next access creates a fresh one.
    pub fn close(&mut self) {
        self.figure = None;
    }

    /// Add an axes for cell `index` (0-based, row-major) of an
    /// `nrows` x `ncols` grid.
    pub fn subplot(&mut self, nrows: usize, ncols: usize, index: usize) -> Result<&mut Axes, Error> {
        if nrows == 0 || ncols == 0 {
            return Err(Error::GridShape { nrows, ncols });
        }
        let cells = nrows * ncols;
        if index >= cells {
            return Err(Error::SubplotIndex { index, cells });
        }
        let rect = RectF::new(
            (index % ncols) as f64 / ncols as f64,
            (index / ncols) as f64 / nrows as f64,
            1.0 / ncols as f64,
            1.0 / nrows as f64,
        );
        let grid = self.rc_grid_default();
        let axes = self.current_figure().add_axes(rect);
        axes.grid = grid;
        Ok(axes)
    }

    /// Plot `y` against `x` on the first axes (creating a full-canvas one if
    /// none exists) and return the attached line.
    pub fn plot(
        &mut self,
        x: &[f64],
        y: &[f64],
        format: Option<&str>,
        label: Option<&str>,
    ) -> Result<&mut Line2D, Error> {
        let spec = match format {
            Some(f) if !f.is_empty() => Some(fmt::parse(f)?),
            _ => None,
        };

        let mut line = Line2D::new(x.to_vec(), y.to_vec())?;
        if let Some(width) = self.rc.get("lines.linewidth").and_then(Value::as_f64) {
            line.line_width = width as f32;
        }
        if let Some(color) = self
            .rc
            .get("lines.color")
            .and_then(Value::as_str)
            .and_then(|s| s.chars().next())
            .and_then(fmt::color_for_char)
        {
            line.color = color;
            line.marker_color = color;
        }
        if let Some(spec) = spec {
            spec.apply(&mut line);
        }
        if let Some(label) = label {
            line.set_label(label);
        }

        let grid = self.rc_grid_default();
        let fig = self.current_figure();
        if fig.axes().is_empty() {
            fig.add_axes(RectF::full()).grid = grid;
        }
        let axes = &mut fig.axes_mut()[0];
        Ok(axes.add_line(line))
    }

    /// Sugar over [`Session::plot`] that overrides the marker fields.
    pub fn scatter(
        &mut self,
        x: &[f64],
        y: &[f64],
        opts: ScatterOptions,
    ) -> Result<&mut Line2D, Error> {
        let line = self.plot(x, y, None, None)?;
        line.marker = opts.marker;
        line.marker_size = opts.size;
        if let Some(color) = opts.color {
            line.marker_color = color;
        }
        if let Some(label) = opts.label {
            line.set_label(label);
        }
        Ok(line)
    }

    /// Title of the most recent axes (created if none exists).
    pub fn title(&mut self, text: impl Into<String>) {
        self.gca().title = Some(text.into());
    }

    pub fn xlabel(&mut self, text: impl Into<String>) {
        self.gca().xlabel = Some(text.into());
    }

    pub fn ylabel(&mut self, text: impl Into<String>) {
        self.gca().ylabel = Some(text.into());
    }

    pub fn legend(&mut self) {
        self.gca().legend = true;
    }

    pub fn grid(&mut self, visible: bool) {
        self.gca().grid = visible;
    }

    /// Export the current figure through the backend selected by the rc
    /// `backend` key. Fails with [`Error::UnknownBackend`] when no backend of
    /// that name has been registered.
    pub fn savefig(&mut self, path: impl AsRef<Path>, opts: &SaveOptions) -> Result<(), Error> {
        let name = self.rc.backend().to_string();
        let rc = &self.rc;
        let fig = self.figure.get_or_insert_with(|| figure_from_rc(rc));
        let backend = self
            .backends
            .get_mut(&name)
            .ok_or_else(|| Error::UnknownBackend(name.clone()))?;
        fig.save(backend.as_mut(), path, opts)
    }

    /// Make a backend available under its own name.
    pub fn register_backend(&mut self, backend: Box<dyn Backend>) {
        let name = backend.name().to_string();
        log::debug!("registered backend {name:?}");
        self.backends.insert(name, backend);
    }

    pub fn use_backend(&mut self, name: &str) {
        self.rc.use_backend(name);
    }

    pub fn backend(&self) -> &str {
        self.rc.backend()
    }

    fn rc_grid_default(&self) -> bool {
        self.rc
            .get("axes.grid")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Most recently added axes, creating a full-canvas one when none exists.
    fn gca(&mut self) -> &mut Axes {
        let grid = self.rc_grid_default();
        let fig = self.current_figure();
        if fig.axes().is_empty() {
            fig.add_axes(RectF::full()).grid = grid;
        }
        let idx = fig.axes().len() - 1;
        &mut fig.axes_mut()[idx]
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn figure_from_rc(rc: &RcParams) -> Figure {
    let mut fig = Figure::new();
    if let Some(width) = rc.get("figure.figsize.width").and_then(Value::as_f64) {
        fig.size.width = width;
    }
    if let Some(height) = rc.get("figure.figsize.height").and_then(Value::as_f64) {
        fig.size.height = height;
    }
    if let Some(dpi) = rc.get("figure.dpi").and_then(Value::as_f64) {
        fig.dpi = dpi;
    }
    fig
}
