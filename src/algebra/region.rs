use crate::foundation::core::{AREA_EPSILON, Affine, Point, Rect};
use crate::foundation::error::{ShapeFxError, ShapeFxResult};
use crate::geometry::path::Path;
use crate::geometry::primitives::Primitive;
use crate::geometry::transform;

/// Area usable as a mask: closed paths combined by union and difference.
///
/// The inside test is the non-zero winding rule applied to each leaf path, combined with set
/// logic, so it stays consistent however unions and differences are nested. Leaves with an
/// empty interior are dropped on construction: they are the identity of a union and a no-op
/// in a difference.
#[derive(Clone, Debug)]
pub struct Region {
    node: Node,
    bounds: Rect,
}

#[derive(Clone, Debug)]
enum Node {
    Empty,
    Shape(Leaf),
    Union(Vec<Region>),
    Difference { base: Box<Region>, holes: Vec<Region> },
}

#[derive(Clone, Debug)]
struct Leaf {
    path: Path,
    rings: Vec<Vec<Point>>,
}

impl Leaf {
    fn new(path: Path) -> Option<Self> {
        if path.is_degenerate() {
            return None;
        }
        let rings = path.flatten_rings();
        let area: f64 = rings.iter().map(|r| ring_area(r).abs()).sum();
        if area <= AREA_EPSILON {
            return None;
        }
        Some(Self { path, rings })
    }

    fn contains(&self, p: Point) -> bool {
        self.rings.iter().map(|r| ring_winding(r, p)).sum::<i32>() != 0
    }
}

impl Region {
    /// Region with no interior.
    pub fn empty() -> Self {
        Self {
            node: Node::Empty,
            bounds: Rect::ZERO,
        }
    }

    /// Region enclosed by a closed path.
    ///
    /// Open paths cannot act as masks and are rejected; degenerate paths give an empty region.
    pub fn from_path(path: &Path) -> ShapeFxResult<Self> {
        if !path.is_closed() {
            return Err(ShapeFxError::validation(
                "open paths cannot be used as a region",
            ));
        }
        Ok(Self::from_closed(path.clone()))
    }

    /// Region enclosed by a primitive.
    pub fn from_primitive(primitive: &Primitive) -> ShapeFxResult<Self> {
        Self::from_path(&primitive.build_path()?)
    }

    fn from_closed(path: Path) -> Self {
        match Leaf::new(path) {
            Some(leaf) => Self {
                bounds: leaf.path.bounds(),
                node: Node::Shape(leaf),
            },
            None => Self::empty(),
        }
    }

    /// `true` when the region has no interior by construction.
    pub fn is_empty(&self) -> bool {
        matches!(self.node, Node::Empty)
    }

    /// Bounding box of the interior.
    ///
    /// Differences keep the bounds of their base, so this may be larger than the interior.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Inside test.
    pub fn contains(&self, p: Point) -> bool {
        if p.x < self.bounds.x0
            || p.x > self.bounds.x1
            || p.y < self.bounds.y0
            || p.y > self.bounds.y1
        {
            return false;
        }
        match &self.node {
            Node::Empty => false,
            Node::Shape(leaf) => leaf.contains(p),
            Node::Union(parts) => parts.iter().any(|r| r.contains(p)),
            Node::Difference { base, holes } => {
                base.contains(p) && !holes.iter().any(|h| h.contains(p))
            }
        }
    }

    /// Fraction of the pixel square `[x, x + 1) x [y, y + 1)` inside the region.
    ///
    /// Sampled on a `depth x depth` grid; `depth <= 1` tests the pixel center only.
    pub fn coverage(&self, x: u32, y: u32, depth: u32) -> f32 {
        let (fx, fy) = (f64::from(x), f64::from(y));
        if fx + 1.0 < self.bounds.x0
            || fx > self.bounds.x1
            || fy + 1.0 < self.bounds.y0
            || fy > self.bounds.y1
        {
            return 0.0;
        }
        if depth <= 1 {
            return if self.contains(Point::new(fx + 0.5, fy + 0.5)) {
                1.0
            } else {
                0.0
            };
        }

        let step = 1.0 / f64::from(depth);
        let mut inside = 0u64;
        for j in 0..depth {
            let sy = fy + (f64::from(j) + 0.5) * step;
            for i in 0..depth {
                let sx = fx + (f64::from(i) + 0.5) * step;
                if self.contains(Point::new(sx, sy)) {
                    inside += 1;
                }
            }
        }
        (inside as f64 / (f64::from(depth) * f64::from(depth))) as f32
    }

    /// Union of this region with `others`.
    pub fn union<I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = Region>,
    {
        let mut parts = Vec::new();
        push_union_part(&mut parts, self.clone());
        for r in others {
            push_union_part(&mut parts, r);
        }
        Self::from_union_parts(parts)
    }

    /// This region minus the union of `holes`.
    ///
    /// Subtracting from an empty region is a no-op that stays empty.
    pub fn difference<I>(&self, holes: I) -> Self
    where
        I: IntoIterator<Item = Region>,
    {
        if self.is_empty() {
            return Self::empty();
        }
        let mut extra: Vec<Region> = holes
            .into_iter()
            .filter(|h| !h.is_empty() && self.bounds.intersect(h.bounds).area() > 0.0)
            .collect();
        if extra.is_empty() {
            return self.clone();
        }

        let (base, mut holes) = match &self.node {
            Node::Difference { base, holes } => (base.clone(), holes.clone()),
            _ => (Box::new(self.clone()), Vec::new()),
        };
        holes.append(&mut extra);
        Self {
            bounds: base.bounds,
            node: Node::Difference { base, holes },
        }
    }

    /// Apply `affine` to every outline, returning a new region.
    pub fn transform(&self, affine: Affine) -> Self {
        match &self.node {
            Node::Empty => Self::empty(),
            Node::Shape(leaf) => Self::from_closed(leaf.path.transform(affine)),
            Node::Union(parts) => {
                Self::from_union_parts(parts.iter().map(|r| r.transform(affine)).collect())
            }
            Node::Difference { base, holes } => base
                .transform(affine)
                .difference(holes.iter().map(|h| h.transform(affine))),
        }
    }

    /// Translate by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        self.transform(transform::translate(dx, dy))
    }

    /// Rotate about the center of [`Region::bounds`].
    pub fn rotate_degrees(&self, degrees: f64) -> Self {
        self.transform(transform::rotate_degrees_about(
            degrees,
            self.bounds.center(),
        ))
    }

    /// Leaf outlines in tree order (bases before their holes).
    pub fn outlines(&self) -> Vec<&Path> {
        let mut out = Vec::new();
        self.collect_outlines(&mut out);
        out
    }

    fn collect_outlines<'a>(&'a self, out: &mut Vec<&'a Path>) {
        match &self.node {
            Node::Empty => {}
            Node::Shape(leaf) => out.push(&leaf.path),
            Node::Union(parts) => parts.iter().for_each(|r| r.collect_outlines(out)),
            Node::Difference { base, holes } => {
                base.collect_outlines(out);
                holes.iter().for_each(|h| h.collect_outlines(out));
            }
        }
    }

    fn from_union_parts(mut parts: Vec<Region>) -> Self {
        match parts.len() {
            0 => Self::empty(),
            1 => parts.pop().unwrap_or_else(Self::empty),
            _ => {
                let bounds = parts
                    .iter()
                    .map(|r| r.bounds)
                    .reduce(|a, b| a.union(b))
                    .unwrap_or(Rect::ZERO);
                Self {
                    node: Node::Union(parts),
                    bounds,
                }
            }
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::empty()
    }
}

fn push_union_part(parts: &mut Vec<Region>, r: Region) {
    match r.node {
        Node::Empty => {}
        Node::Union(children) => parts.extend(children),
        node => parts.push(Region {
            node,
            bounds: r.bounds,
        }),
    }
}

fn ring_area(ring: &[Point]) -> f64 {
    let n = ring.len();
    let mut acc = 0.0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        acc += a.x * b.y - b.x * a.y;
    }
    acc * 0.5
}

fn ring_winding(ring: &[Point], p: Point) -> i32 {
    let n = ring.len();
    let mut w = 0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        let side = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
        if a.y <= p.y {
            if b.y > p.y && side > 0.0 {
                w += 1;
            }
        } else if b.y <= p.y && side < 0.0 {
            w -= 1;
        }
    }
    w
}

#[cfg(test)]
#[path = "../../tests/unit/algebra/region.rs"]
mod tests;
