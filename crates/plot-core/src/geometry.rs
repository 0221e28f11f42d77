// File: crates/plot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for device-space (pixel) math.

/// A point in device space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointPx {
    pub x: f32,
    pub y: f32,
}

impl PointPx {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in device space, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectPx {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectPx {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }
}
