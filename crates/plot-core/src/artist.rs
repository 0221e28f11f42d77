// File: crates/plot-core/src/artist.rs
// Summary: Artist identity/state shared by all drawables, plus the Drawable seam.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Error;
use crate::geometry::RectPx;
use crate::renderer::Renderer;
use crate::value::Value;

static NEXT_ARTIST_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity of an artist. Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtistId(u64);

impl ArtistId {
    fn next() -> Self {
        Self(NEXT_ARTIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// State common to every drawable: identity, visibility, stacking order,
/// legend label, and an open property bag of [`Value`]s.
#[derive(Clone, Debug)]
pub struct ArtistBase {
    id: ArtistId,
    pub visible: bool,
    pub zorder: i32,
    pub label: Option<String>,
    properties: HashMap<String, Value>,
}

impl ArtistBase {
    pub fn new() -> Self {
        Self {
            id: ArtistId::next(),
            visible: true,
            zorder: 0,
            label: None,
            properties: HashMap::new(),
        }
    }

    pub fn id(&self) -> ArtistId {
        self.id
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Unknown keys are not an error; they simply have no value.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

impl Default for ArtistBase {
    fn default() -> Self {
        Self::new()
    }
}

/// Accessor trait over the shared [`ArtistBase`] state.
pub trait Artist {
    fn base(&self) -> &ArtistBase;
    fn base_mut(&mut self) -> &mut ArtistBase;

    fn id(&self) -> ArtistId {
        self.base().id()
    }
    fn visible(&self) -> bool {
        self.base().visible
    }
    fn set_visible(&mut self, visible: bool) {
        self.base_mut().visible = visible;
    }
    fn zorder(&self) -> i32 {
        self.base().zorder
    }
    fn set_zorder(&mut self, zorder: i32) {
        self.base_mut().zorder = zorder;
    }
    fn label(&self) -> Option<&str> {
        self.base().label.as_deref()
    }
    fn set_label(&mut self, label: impl Into<String>) {
        self.base_mut().label = Some(label.into());
    }
    fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.base_mut().set_property(name, value);
    }
    fn property(&self, name: &str) -> Option<&Value> {
        self.base().property(name)
    }
}

/// Per-pass state handed down the scene graph during a draw.
#[derive(Clone, Copy, Debug)]
pub struct DrawContext {
    /// Device-space region the artist may draw into.
    pub region: RectPx,
    /// Data-space X range mapped onto `region`. Set by the owning axes;
    /// the identity range elsewhere.
    pub x_range: (f64, f64),
    /// Data-space Y range mapped onto `region`.
    pub y_range: (f64, f64),
}

impl DrawContext {
    pub fn new(region: RectPx) -> Self {
        Self { region, x_range: (0.0, 1.0), y_range: (0.0, 1.0) }
    }
}

/// Capability implemented by every concrete artist. Invisible artists
/// short-circuit to `Ok(())`.
pub trait Drawable {
    fn draw(&self, renderer: &mut dyn Renderer, ctx: &DrawContext) -> Result<(), Error>;
}
