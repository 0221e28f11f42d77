// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the artist scene graph and renderer seam.

pub mod artist;
pub mod axes;
pub mod error;
pub mod figure;
pub mod fmt;
pub mod geometry;
pub mod line;
pub mod renderer;
pub mod ticks;
pub mod types;
pub mod value;

pub use artist::{Artist, ArtistBase, ArtistId, DrawContext, Drawable};
pub use axes::Axes;
pub use error::Error;
pub use figure::Figure;
pub use fmt::FormatSpec;
pub use line::{DataExtent, Line2D, LineStyle, MarkerStyle};
pub use renderer::{Backend, RenderCommand, RenderList, Renderer, SaveOptions, Stroke};
pub use types::{Color, RectF, SizeF};
pub use value::Value;
