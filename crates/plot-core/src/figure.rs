// File: crates/plot-core/src/figure.rs
// Summary: Figure artist: the top-level canvas owning axes; draw pass and export seam.

use std::path::Path;

use crate::artist::{Artist, ArtistBase, DrawContext, Drawable};
use crate::axes::Axes;
use crate::error::Error;
use crate::geometry::RectPx;
use crate::renderer::{Backend, Renderer, SaveOptions};
use crate::types::{Color, RectF, SizeF, DEFAULT_DPI};

/// Top-level canvas. Exclusively owns its axes; axes live until removed by
/// [`Figure::clear`].
pub struct Figure {
    base: ArtistBase,
    pub size: SizeF,
    pub dpi: f64,
    pub background: Color,
    axes: Vec<Axes>,
}

impl Figure {
    pub fn new() -> Self {
        Self {
            base: ArtistBase::new(),
            size: SizeF::default(),
            dpi: DEFAULT_DPI,
            background: Color::WHITE,
            axes: Vec::new(),
        }
    }

    /// Append a new axes at the given normalized rectangle. Append-only;
    /// no duplicate or overlap checks.
    pub fn add_axes(&mut self, rect: RectF) -> &mut Axes {
        self.axes.push(Axes::new(rect));
        let idx = self.axes.len() - 1;
        &mut self.axes[idx]
    }

    /// Axes in insertion order.
    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut [Axes] {
        &mut self.axes
    }

    /// Drop every axes, regardless of prior count.
    pub fn clear(&mut self) {
        self.axes.clear();
    }

    /// Canvas size in device pixels at the figure's dpi.
    pub fn device_size(&self) -> (f32, f32) {
        (
            (self.size.width * self.dpi) as f32,
            (self.size.height * self.dpi) as f32,
        )
    }

    /// Run the full draw pass against `renderer` at the figure's own size.
    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<(), Error> {
        let (w, h) = self.device_size();
        let ctx = DrawContext::new(RectPx::from_ltwh(0.0, 0.0, w, h));
        self.draw(renderer, &ctx)
    }

    /// Export through a backend. The core crate ships no encoder; callers
    /// supply one (see [`Backend`]).
    pub fn save(
        &self,
        backend: &mut dyn Backend,
        path: impl AsRef<Path>,
        opts: &SaveOptions,
    ) -> Result<(), Error> {
        let path = path.as_ref();
        log::debug!(
            "saving figure via backend {:?} to {} ({})",
            backend.name(),
            path.display(),
            opts.format,
        );
        backend.save(self, path, opts)
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl Artist for Figure {
    fn base(&self) -> &ArtistBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut ArtistBase {
        &mut self.base
    }
}

impl Drawable for Figure {
    fn draw(&self, renderer: &mut dyn Renderer, ctx: &DrawContext) -> Result<(), Error> {
        if !self.base.visible {
            return Ok(());
        }

        renderer.clear(self.background);

        let region = ctx.region;
        let (w, h) = (region.width(), region.height());

        // Stable sort: zorder governs stacking, insertion order breaks ties.
        let mut order: Vec<usize> = (0..self.axes.len()).collect();
        order.sort_by_key(|&i| self.axes[i].zorder());

        for i in order {
            let axes = &self.axes[i];
            let rect = axes.rect();
            // Normalized rects use a bottom-left origin; device space is
            // top-left, so the Y band flips.
            let child = RectPx::from_ltwh(
                region.left + (rect.x * w as f64) as f32,
                region.top + ((1.0 - rect.y - rect.height) * h as f64) as f32,
                (rect.width * w as f64) as f32,
                (rect.height * h as f64) as f32,
            );
            axes.draw(renderer, &DrawContext::new(child))?;
        }
        Ok(())
    }
}
