use kurbo::Shape;

use crate::foundation::core::{BezPath, FLATTEN_TOLERANCE, Point, Rect};
use crate::foundation::error::{ShapeFxError, ShapeFxResult};
use crate::geometry::path::Path;

/// Closed polygon primitives that resolve to a [`Path`] on demand.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// Axis-aligned rectangle with top-left corner `(x, y)`.
    Rectangle {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width, `>= 0`.
        width: f64,
        /// Height, `>= 0`.
        height: f64,
    },
    /// Axis-aligned ellipse.
    Ellipse {
        /// Center x.
        cx: f64,
        /// Center y.
        cy: f64,
        /// Horizontal radius, `>= 0`.
        rx: f64,
        /// Vertical radius, `>= 0`.
        ry: f64,
    },
    /// Star with `points` prongs alternating between outer and inner radius.
    Star {
        /// Star center.
        center: Point,
        /// Number of prongs, `>= 3`.
        points: u32,
        /// Radius of the inner vertices, `> 0`.
        inner_radius: f64,
        /// Radius of the prong tips, `>= inner_radius`.
        outer_radius: f64,
    },
}

impl Primitive {
    /// Rectangle from origin and size.
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    /// Ellipse from center and radii.
    pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self::Ellipse { cx, cy, rx, ry }
    }

    /// Circle of radius `r`.
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::ellipse(cx, cy, r, r)
    }

    /// Star centered on `center`.
    pub fn star(center: Point, points: u32, inner_radius: f64, outer_radius: f64) -> Self {
        Self::Star {
            center,
            points,
            inner_radius,
            outer_radius,
        }
    }

    /// Check the primitive invariants.
    pub fn validate(&self) -> ShapeFxResult<()> {
        match *self {
            Self::Rectangle {
                x,
                y,
                width,
                height,
            } => {
                finite(&[x, y, width, height], "rectangle")?;
                if width < 0.0 || height < 0.0 {
                    return Err(ShapeFxError::validation(
                        "rectangle width and height must be >= 0",
                    ));
                }
            }
            Self::Ellipse { cx, cy, rx, ry } => {
                finite(&[cx, cy, rx, ry], "ellipse")?;
                if rx < 0.0 || ry < 0.0 {
                    return Err(ShapeFxError::validation("ellipse radii must be >= 0"));
                }
            }
            Self::Star {
                center,
                points,
                inner_radius,
                outer_radius,
            } => {
                finite(&[center.x, center.y, inner_radius, outer_radius], "star")?;
                if points < 3 {
                    return Err(ShapeFxError::validation("star needs at least 3 points"));
                }
                if points.checked_mul(2).is_none() {
                    return Err(ShapeFxError::validation(format!(
                        "star has too many points: {points}"
                    )));
                }
                if inner_radius <= 0.0 {
                    return Err(ShapeFxError::validation("star inner_radius must be > 0"));
                }
                if outer_radius < inner_radius {
                    return Err(ShapeFxError::validation(
                        "star outer_radius must be >= inner_radius",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Nominal bounds of the primitive.
    pub fn bounds(&self) -> Rect {
        match *self {
            Self::Rectangle {
                x,
                y,
                width,
                height,
            } => Rect::new(x, y, x + width, y + height),
            Self::Ellipse { cx, cy, rx, ry } => Rect::new(cx - rx, cy - ry, cx + rx, cy + ry),
            Self::Star {
                center,
                outer_radius,
                ..
            } => Rect::new(
                center.x - outer_radius,
                center.y - outer_radius,
                center.x + outer_radius,
                center.y + outer_radius,
            ),
        }
    }

    /// Resolve to a closed path. See [`build_path`].
    pub fn build_path(&self) -> ShapeFxResult<Path> {
        build_path(self)
    }
}

/// Resolve a primitive to a closed [`Path`].
///
/// Rectangles become four lines, ellipses a closed cubic Bézier approximation and stars
/// `2 * points` vertices alternating between outer and inner radius, starting at the top.
pub fn build_path(primitive: &Primitive) -> ShapeFxResult<Path> {
    primitive.validate()?;
    let bez = match *primitive {
        Primitive::Rectangle {
            x,
            y,
            width,
            height,
        } => {
            let mut bez = BezPath::new();
            bez.move_to((x, y));
            bez.line_to((x + width, y));
            bez.line_to((x + width, y + height));
            bez.line_to((x, y + height));
            bez.close_path();
            bez
        }
        Primitive::Ellipse { cx, cy, rx, ry } => {
            kurbo::Ellipse::new((cx, cy), (rx, ry), 0.0).to_path(FLATTEN_TOLERANCE)
        }
        Primitive::Star {
            center,
            points,
            inner_radius,
            outer_radius,
        } => {
            let vertices = points
                .checked_mul(2)
                .ok_or_else(|| ShapeFxError::validation("star vertex count overflows"))?;
            let step = std::f64::consts::PI / f64::from(points);
            let start = -std::f64::consts::FRAC_PI_2;
            let mut bez = BezPath::new();
            for i in 0..vertices {
                let r = if i % 2 == 0 { outer_radius } else { inner_radius };
                let a = start + step * f64::from(i);
                let p = Point::new(center.x + r * a.cos(), center.y + r * a.sin());
                if i == 0 {
                    bez.move_to(p);
                } else {
                    bez.line_to(p);
                }
            }
            bez.close_path();
            bez
        }
    };
    Ok(Path::closed(bez))
}

fn finite(values: &[f64], what: &str) -> ShapeFxResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ShapeFxError::validation(format!(
            "{what} parameters must be finite"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/primitives.rs"]
mod tests;
