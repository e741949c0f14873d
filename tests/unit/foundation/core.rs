use super::*;

#[test]
fn covering_rounds_outward_and_clamps_to_image() {
    let w = PixelRect::covering(Rect::new(-3.5, 2.25, 10.5, 7.75), 8, 6).unwrap();
    assert_eq!(
        w,
        PixelRect {
            x: 0,
            y: 2,
            width: 8,
            height: 4
        }
    );
    assert_eq!(w.right(), 8);
    assert_eq!(w.bottom(), 6);
}

#[test]
fn covering_outside_image_is_none() {
    assert!(PixelRect::covering(Rect::new(20.0, 20.0, 30.0, 30.0), 10, 10).is_none());
    assert!(PixelRect::covering(Rect::new(-5.0, 0.0, 0.0, 5.0), 10, 10).is_none());
    assert!(PixelRect::covering(Rect::new(2.0, 2.0, 2.0, 8.0), 10, 10).is_none());
}

#[test]
fn covering_rejects_non_finite_bounds() {
    assert!(PixelRect::covering(Rect::new(0.0, 0.0, f64::INFINITY, 4.0), 10, 10).is_none());
}
