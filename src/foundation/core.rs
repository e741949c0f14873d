pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Tolerance used when curves are flattened into line segments for inside tests.
pub(crate) const FLATTEN_TOLERANCE: f64 = 0.1;

/// Accuracy used for arc length queries.
pub(crate) const ARCLEN_ACCURACY: f64 = 1e-4;

/// Areas at or below this are treated as empty interiors.
pub(crate) const AREA_EPSILON: f64 = 1e-9;

/// Integer pixel window `[x, x + width) x [y, y + height)` inside an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    /// Left column.
    pub x: u32,
    /// Top row.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelRect {
    /// Pixel window touched by `bounds` inside a `width x height` image.
    ///
    /// Pixel `(x, y)` covers `[x, x + 1) x [y, y + 1)`. Returns `None` when the bounds do not
    /// overlap the image at all.
    pub fn covering(bounds: Rect, width: u32, height: u32) -> Option<Self> {
        if !(bounds.x0.is_finite()
            && bounds.y0.is_finite()
            && bounds.x1.is_finite()
            && bounds.y1.is_finite())
        {
            return None;
        }
        let x0 = bounds.x0.floor().max(0.0);
        let y0 = bounds.y0.floor().max(0.0);
        let x1 = bounds.x1.ceil().min(f64::from(width));
        let y1 = bounds.y1.ceil().min(f64::from(height));
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Self {
            x: x0 as u32,
            y: y0 as u32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        })
    }

    /// Exclusive right column.
    pub fn right(self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom row.
    pub fn bottom(self) -> u32 {
        self.y + self.height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
