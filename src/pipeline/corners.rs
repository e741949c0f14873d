use image::imageops::{self, FilterType};

use crate::algebra::region::Region;
use crate::foundation::error::{ShapeFxError, ShapeFxResult};
use crate::geometry::primitives::Primitive;
use crate::pipeline::masked::{CompositeOpts, clear_inside};
use crate::pipeline::pixel::{Image, MaskPixel};

/// Cutouts that round the four corners of a `width x height` image.
///
/// Returned in the order top-left, top-right, bottom-left, bottom-right. Each cutout is the
/// part of an `r x r` corner square lying outside the inscribed quarter circle, offset by half
/// a pixel so the arc meets the image edges at pixel centers. A radius `<= 0` gives four empty
/// regions.
#[tracing::instrument]
pub fn rounded_corners(width: u32, height: u32, radius: f64) -> ShapeFxResult<[Region; 4]> {
    if !radius.is_finite() {
        return Err(ShapeFxError::validation(format!(
            "corner radius must be finite, got {radius}"
        )));
    }
    if radius <= 0.0 {
        return Ok(std::array::from_fn(|_| Region::empty()));
    }

    let square = Region::from_primitive(&Primitive::rectangle(-0.5, -0.5, radius, radius))?;
    let arc = Region::from_primitive(&Primitive::circle(
        radius - 0.5,
        radius - 0.5,
        radius,
    ))?;
    let top_left = square.difference([arc]);

    let b = top_left.bounds();
    let right = f64::from(width) - b.width() + 1.0;
    let bottom = f64::from(height) - b.height() + 1.0;

    let top_right = top_left.rotate_degrees(90.0).translate(right, 0.0);
    let bottom_left = top_left.rotate_degrees(-90.0).translate(0.0, bottom);
    let bottom_right = top_left.rotate_degrees(180.0).translate(right, bottom);
    Ok([top_left, top_right, bottom_left, bottom_right])
}

/// Make the four corners of `source` transparent with the given radius.
#[tracing::instrument(skip(source), fields(width = source.width(), height = source.height()))]
pub fn apply_rounded_corners<P: MaskPixel>(
    source: &Image<P>,
    radius: f64,
    opts: &CompositeOpts,
) -> ShapeFxResult<Image<P>> {
    let [tl, tr, bl, br] = rounded_corners(source.width(), source.height(), radius)?;
    let mask = tl.union([tr, bl, br]);
    clear_inside(source, &mask, opts)
}

/// Resize `source` to cover `width x height`, center-crop, then round the corners.
#[tracing::instrument(skip(source), fields(src_width = source.width(), src_height = source.height()))]
pub fn to_avatar<P: MaskPixel>(
    source: &Image<P>,
    width: u32,
    height: u32,
    radius: f64,
    opts: &CompositeOpts,
) -> ShapeFxResult<Image<P>> {
    if width == 0 || height == 0 {
        return Err(ShapeFxError::validation("avatar size must be non-zero"));
    }
    let (sw, sh) = source.dimensions();
    if sw == 0 || sh == 0 {
        return Err(ShapeFxError::validation("avatar source image is empty"));
    }

    let scale = (f64::from(width) / f64::from(sw)).max(f64::from(height) / f64::from(sh));
    let rw = ((f64::from(sw) * scale).round() as u32).max(width);
    let rh = ((f64::from(sh) * scale).round() as u32).max(height);
    let resized = if (rw, rh) == (sw, sh) {
        source.clone()
    } else {
        imageops::resize(source, rw, rh, FilterType::Lanczos3)
    };
    let cropped = imageops::crop_imm(&resized, (rw - width) / 2, (rh - height) / 2, width, height)
        .to_image();
    apply_rounded_corners(&cropped, radius, opts)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/corners.rs"]
mod tests;
