use super::*;
use crate::foundation::core::BezPath;

fn rect(x: f64, y: f64, w: f64, h: f64) -> Region {
    Region::from_primitive(&Primitive::rectangle(x, y, w, h)).unwrap()
}

#[test]
fn rectangle_contains_interior_points_only() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(5.0, 5.0)));
    assert!(!r.contains(Point::new(15.0, 5.0)));
    assert!(!r.contains(Point::new(-0.1, 5.0)));
    assert_eq!(r.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn open_path_is_rejected() {
    let mut bez = BezPath::new();
    bez.move_to((0.0, 0.0));
    bez.line_to((10.0, 0.0));
    bez.line_to((10.0, 10.0));
    assert!(matches!(
        Region::from_path(&Path::open(bez)),
        Err(ShapeFxError::Validation(_))
    ));
}

#[test]
fn degenerate_primitive_is_empty() {
    assert!(rect(5.0, 5.0, 0.0, 10.0).is_empty());
    assert!(
        Region::from_primitive(&Primitive::circle(3.0, 3.0, 0.0))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn union_covers_both_and_bounds_grow() {
    let u = rect(0.0, 0.0, 10.0, 10.0).union([rect(20.0, 0.0, 10.0, 10.0)]);
    assert!(u.contains(Point::new(5.0, 5.0)));
    assert!(u.contains(Point::new(25.0, 5.0)));
    assert!(!u.contains(Point::new(15.0, 5.0)));
    assert_eq!(u.bounds(), Rect::new(0.0, 0.0, 30.0, 10.0));
}

#[test]
fn union_with_empty_is_identity() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let u = a.union([Region::empty(), rect(1.0, 1.0, 0.0, 0.0)]);
    assert_eq!(u.bounds(), a.bounds());
    assert_eq!(u.outlines().len(), 1);
}

#[test]
fn difference_cuts_a_hole() {
    let d = rect(0.0, 0.0, 10.0, 10.0).difference([rect(2.0, 2.0, 4.0, 4.0)]);
    assert!(d.contains(Point::new(1.0, 1.0)));
    assert!(!d.contains(Point::new(4.0, 4.0)));
    assert!(d.contains(Point::new(8.0, 8.0)));
    assert_eq!(d.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn difference_from_empty_stays_empty() {
    assert!(Region::empty().difference([rect(0.0, 0.0, 5.0, 5.0)]).is_empty());
}

#[test]
fn difference_with_disjoint_or_degenerate_hole_is_noop() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let d = a.difference([rect(50.0, 50.0, 5.0, 5.0), rect(2.0, 2.0, 0.0, 3.0)]);
    assert_eq!(d.outlines().len(), 1);
}

#[test]
fn overlapping_opposite_windings_still_union() {
    let mut cw = BezPath::new();
    cw.move_to((0.0, 0.0));
    cw.line_to((10.0, 0.0));
    cw.line_to((10.0, 10.0));
    cw.line_to((0.0, 10.0));
    let mut ccw = BezPath::new();
    ccw.move_to((5.0, 5.0));
    ccw.line_to((5.0, 15.0));
    ccw.line_to((15.0, 15.0));
    ccw.line_to((15.0, 5.0));
    let a = Region::from_path(&Path::closed(cw)).unwrap();
    let b = Region::from_path(&Path::closed(ccw)).unwrap();
    let u = a.union([b]);
    assert!(u.contains(Point::new(7.0, 7.0)));
    assert!(u.contains(Point::new(12.0, 12.0)));
}

#[test]
fn coverage_is_fractional_on_edges() {
    let r = rect(0.0, 0.0, 2.5, 4.0);
    assert_eq!(r.coverage(0, 0, 4), 1.0);
    assert_eq!(r.coverage(2, 0, 4), 0.5);
    assert_eq!(r.coverage(3, 0, 4), 0.0);
    assert_eq!(r.coverage(1, 0, 1), 1.0);
}

#[test]
fn transform_moves_every_leaf() {
    let d = rect(0.0, 0.0, 10.0, 10.0).difference([rect(2.0, 2.0, 4.0, 4.0)]);
    let moved = d.translate(100.0, 0.0);
    assert!(moved.contains(Point::new(101.0, 1.0)));
    assert!(!moved.contains(Point::new(104.0, 4.0)));
    assert!(!moved.contains(Point::new(1.0, 1.0)));
    assert!(d.contains(Point::new(1.0, 1.0)));
}

#[test]
fn rotate_degrees_uses_bounds_center() {
    let r = rect(0.0, 0.0, 20.0, 10.0).rotate_degrees(90.0);
    let b = r.bounds();
    assert!((b.x0 - 5.0).abs() < 1e-9);
    assert!((b.y0 + 5.0).abs() < 1e-9);
    assert!(r.contains(Point::new(10.0, 14.0)));
}
