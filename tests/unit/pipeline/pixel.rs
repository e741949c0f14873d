use super::*;
use image::{Luma, LumaA, Rgb, Rgba};

#[test]
fn u8_lerp_is_exact_at_ends_and_for_equal_values() {
    assert_eq!(10u8.lerp(200, 0.0), 10);
    assert_eq!(10u8.lerp(200, 1.0), 200);
    assert_eq!(77u8.lerp(77, 0.37), 77);
    assert_eq!(0u8.lerp(255, 0.5), 128);
}

#[test]
fn u16_and_f32_lerp() {
    assert_eq!(0u16.lerp(1000, 0.25), 250);
    assert_eq!(0.0f32.lerp(2.0, 0.75), 1.5);
    assert_eq!(0.3f32.lerp(0.3, 0.5), 0.3);
}

#[test]
fn scale_maps_unit_factor() {
    assert_eq!(200u8.scale(1.0), 200);
    assert_eq!(200u8.scale(0.0), 0);
    assert_eq!(1000u16.scale(0.5), 500);
    assert_eq!(0.8f32.scale(0.5), 0.4);
}

#[test]
fn blend_touches_every_channel() {
    let a = Rgba([0u8, 0, 0, 0]);
    let b = Rgba([255u8, 255, 255, 255]);
    assert_eq!(a.blend_coverage(&b, 1.0), b);
    assert_eq!(a.blend_coverage(&b, 0.0), a);
    assert_eq!(a.blend_coverage(&b, 0.5), Rgba([128, 128, 128, 128]));
}

fn blend_in_place<P: MaskPixel>(dst: &mut P, src: &P, coverage: f32) {
    *dst = dst.blend_coverage(src, coverage);
}

#[test]
fn blend_coverage_through_mutable_reference() {
    let mut dst = Rgba([0u8, 0, 0, 255]);
    blend_in_place(&mut dst, &Rgba([200, 100, 50, 255]), 0.5);
    assert_eq!(dst, Rgba([100, 50, 25, 255]));

    let mut dst = Rgb([0u16, 1000, 2000]);
    blend_in_place(&mut dst, &Rgb([1000, 1000, 0]), 0.25);
    assert_eq!(dst, Rgb([250, 1000, 1500]));
}

#[test]
fn punch_alpha_keeps_color() {
    let p = Rgba([10u8, 20, 30, 255]);
    assert_eq!(p.punch_alpha(1.0), Rgba([10, 20, 30, 0]));
    assert_eq!(p.punch_alpha(0.0), p);
    assert_eq!(LumaA([9u8, 200]).punch_alpha(1.0), LumaA([9, 0]));
}

#[test]
fn punch_alpha_without_alpha_channel_is_identity() {
    let p = Rgb([10u8, 20, 30]);
    assert_eq!(p.punch_alpha(1.0), p);
    let l = Luma([0.5f32]);
    assert_eq!(l.punch_alpha(0.7), l);
}
