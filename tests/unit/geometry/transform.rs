use super::*;

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn rotate_quarter_turn_about_origin_maps_x_to_y() {
    let p = rotate_degrees_about(90.0, Point::ORIGIN) * Point::new(1.0, 0.0);
    assert!(close(p, Point::new(0.0, 1.0)));
}

#[test]
fn rotate_about_pivot_keeps_pivot_fixed() {
    let pivot = Point::new(5.0, 7.0);
    let a = rotate_degrees_about(37.0, pivot);
    assert!(close(a * pivot, pivot));
    assert!(close(
        rotate_degrees_about(180.0, pivot) * Point::new(6.0, 7.0),
        Point::new(4.0, 7.0)
    ));
}

#[test]
fn translate_moves_points() {
    assert!(close(
        translate(3.0, -2.0) * Point::new(1.0, 1.0),
        Point::new(4.0, -1.0)
    ));
}
