use super::*;

#[test]
fn mul_div255_rounds_and_preserves_extremes() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(255, 128), 128);
    assert_eq!(mul_div255_u16(100, 255), 100);
}

#[test]
fn unit_to_u8_clamps() {
    assert_eq!(unit_to_u8(-1.0), 0);
    assert_eq!(unit_to_u8(0.5), 128);
    assert_eq!(unit_to_u8(2.0), 255);
}

#[test]
fn lerp_is_exact_for_equal_endpoints() {
    assert_eq!(lerp_f32(0.3, 0.3, 0.77), 0.3);
    assert_eq!(lerp_f32(0.0, 10.0, 0.25), 2.5);
}
