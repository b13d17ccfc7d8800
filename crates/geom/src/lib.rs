//! Geometry primitives used across pinboard.
//!
//! Child offsets may be negative (a child can hang off the top-left edge of
//! its container), so points are signed while sizes stay unsigned.

/// Width/height size type.
mod expanse;
/// Signed point helpers.
mod point;
/// Rectangle operations.
mod rect;

pub use expanse::Expanse;
pub use point::Point;
pub use rect::Rect;

/// The axis a measurement is taken along.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Axis {
    /// Width-wise.
    Horizontal,
    /// Height-wise.
    Vertical,
}
