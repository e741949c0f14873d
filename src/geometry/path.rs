use kurbo::{ParamCurve, ParamCurveArclen, PathEl, PathSeg, Shape};

use crate::foundation::core::{
    ARCLEN_ACCURACY, AREA_EPSILON, Affine, BezPath, FLATTEN_TOLERANCE, Point, Rect,
};
use crate::geometry::transform;

/// Geometric outline made of line and Bézier segments.
///
/// Bounds and arc length are derived when the path is built and recomputed by every transform;
/// transforms return new paths and never touch the receiver.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    bez: BezPath,
    closed: bool,
    bounds: Rect,
    length: f64,
}

/// Position and direction of one glyph placed along a path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GlyphPlacement {
    /// Glyph center on the path.
    pub position: Point,
    /// Tangent direction at `position`, in radians.
    pub angle: f64,
}

impl Path {
    /// Build a closed path; every subpath is terminated with `ClosePath`.
    pub fn closed(bez: BezPath) -> Self {
        Self::from_parts(close_subpaths(&bez), true)
    }

    /// Build an open path, usable for text placement but not as a mask.
    pub fn open(bez: BezPath) -> Self {
        Self::from_parts(bez, false)
    }

    fn from_parts(bez: BezPath, closed: bool) -> Self {
        let bounds = if bez.elements().is_empty() {
            Rect::ZERO
        } else {
            bez.bounding_box()
        };
        let length = bez.perimeter(ARCLEN_ACCURACY);
        Self {
            bez,
            closed,
            bounds,
            length,
        }
    }

    /// `true` when every subpath is closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Total arc length, including closing segments of closed subpaths.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Underlying kurbo path.
    pub fn as_bezpath(&self) -> &BezPath {
        &self.bez
    }

    /// `true` when the bounding box has no area, so the interior is empty.
    pub fn is_degenerate(&self) -> bool {
        self.bounds.area() <= AREA_EPSILON
    }

    /// Apply `affine`, returning a new path.
    pub fn transform(&self, affine: Affine) -> Self {
        let mut bez = self.bez.clone();
        bez.apply_affine(affine);
        Self::from_parts(bez, self.closed)
    }

    /// Translate by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        self.transform(transform::translate(dx, dy))
    }

    /// Rotate about the center of the path's bounds.
    pub fn rotate_degrees(&self, degrees: f64) -> Self {
        self.rotate_degrees_about(degrees, self.bounds.center())
    }

    /// Rotate about an explicit pivot.
    pub fn rotate_degrees_about(&self, degrees: f64, pivot: Point) -> Self {
        self.transform(transform::rotate_degrees_about(degrees, pivot))
    }

    /// Point and tangent angle at arc-length `distance` from the start.
    ///
    /// Returns `None` outside `[0, length]`.
    pub fn point_at(&self, distance: f64) -> Option<(Point, f64)> {
        if !distance.is_finite() || distance < 0.0 || distance > self.length + ARCLEN_ACCURACY {
            return None;
        }

        let mut remaining = distance;
        let mut last = None;
        for seg in self.bez.segments() {
            let len = seg.arclen(ARCLEN_ACCURACY);
            if remaining <= len {
                let t = if len > 0.0 {
                    seg.inv_arclen(remaining, ARCLEN_ACCURACY)
                } else {
                    0.0
                };
                return Some((seg.eval(t), tangent_angle(&seg, t)));
            }
            remaining -= len;
            last = Some(seg);
        }
        last.map(|seg| (seg.eval(1.0), tangent_angle(&seg, 1.0)))
    }

    /// Place glyphs with the given advances one after another along the path.
    ///
    /// Each glyph sits at the midpoint of its advance. Glyphs whose midpoint would fall past the
    /// end of the path are dropped.
    pub fn place_along(&self, advances: &[f64]) -> Vec<GlyphPlacement> {
        let mut out = Vec::with_capacity(advances.len());
        let mut cursor = 0.0;
        for &advance in advances {
            let center = cursor + advance * 0.5;
            if center > self.length {
                break;
            }
            if let Some((position, angle)) = self.point_at(center) {
                out.push(GlyphPlacement { position, angle });
            }
            cursor += advance;
        }
        out
    }

    /// Flatten into polygon rings (implicitly closed), dropping rings with fewer than 3 points.
    pub(crate) fn flatten_rings(&self) -> Vec<Vec<Point>> {
        let mut rings = Vec::new();
        let mut cur: Vec<Point> = Vec::new();
        kurbo::flatten(
            self.bez.elements().iter().copied(),
            FLATTEN_TOLERANCE,
            |el| match el {
                PathEl::MoveTo(p) => {
                    finish_ring(&mut rings, &mut cur);
                    cur.push(p);
                }
                PathEl::LineTo(p) => cur.push(p),
                PathEl::ClosePath => finish_ring(&mut rings, &mut cur),
                PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
            },
        );
        finish_ring(&mut rings, &mut cur);
        rings
    }
}

fn finish_ring(rings: &mut Vec<Vec<Point>>, cur: &mut Vec<Point>) {
    if cur.len() >= 3 {
        rings.push(std::mem::take(cur));
    } else {
        cur.clear();
    }
}

fn close_subpaths(bez: &BezPath) -> BezPath {
    let mut out = BezPath::new();
    let mut open = false;
    for &el in bez.elements() {
        match el {
            PathEl::MoveTo(_) => {
                if open {
                    out.close_path();
                }
                open = false;
                out.push(el);
            }
            PathEl::ClosePath => {
                if open {
                    out.close_path();
                }
                open = false;
            }
            _ => {
                open = true;
                out.push(el);
            }
        }
    }
    if open {
        out.close_path();
    }
    out
}

fn tangent_angle(seg: &PathSeg, t: f64) -> f64 {
    const H: f64 = 1e-4;
    let a = seg.eval((t - H).max(0.0));
    let b = seg.eval((t + H).min(1.0));
    let d = b - a;
    if d.hypot() == 0.0 { 0.0 } else { d.atan2() }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
