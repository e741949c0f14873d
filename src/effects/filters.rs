use image::imageops;

use crate::foundation::error::{ShapeFxError, ShapeFxResult};
use crate::pipeline::pixel::{Channel, Image, MaskPixel};

/// Gaussian blur in place. `sigma == 0` leaves the image untouched.
pub fn blur<P: MaskPixel>(img: &mut Image<P>, sigma: f32) -> ShapeFxResult<()> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(ShapeFxError::validation(format!(
            "blur sigma must be finite and >= 0, got {sigma}"
        )));
    }
    if sigma == 0.0 || img.width() == 0 || img.height() == 0 {
        return Ok(());
    }
    *img = imageops::blur(&*img, sigma);
    Ok(())
}

/// Replace each `cell_size x cell_size` block with its per-channel mean.
///
/// Blocks on the right and bottom edges may be smaller. `cell_size <= 1` is the identity.
pub fn pixelate<P: MaskPixel>(img: &mut Image<P>, cell_size: u32) -> ShapeFxResult<()> {
    if cell_size <= 1 {
        return Ok(());
    }
    let (w, h) = img.dimensions();
    let channels = usize::from(P::CHANNEL_COUNT);
    let mut sums = vec![0.0f64; channels];

    for cy in (0..h).step_by(cell_size as usize) {
        let y1 = (cy + cell_size).min(h);
        for cx in (0..w).step_by(cell_size as usize) {
            let x1 = (cx + cell_size).min(w);
            sums.iter_mut().for_each(|s| *s = 0.0);
            for y in cy..y1 {
                for x in cx..x1 {
                    for (s, c) in sums.iter_mut().zip(img.get_pixel(x, y).channels()) {
                        *s += f64::from(c.to_sample());
                    }
                }
            }

            let n = f64::from((x1 - cx) * (y1 - cy));
            let mut mean = *img.get_pixel(cx, cy);
            for (c, s) in mean.channels_mut().iter_mut().zip(&sums) {
                *c = Channel::from_sample((s / n) as f32);
            }
            for y in cy..y1 {
                for x in cx..x1 {
                    img.put_pixel(x, y, mean);
                }
            }
        }
    }
    Ok(())
}

/// Replace color channels with luma, keeping alpha.
pub fn grayscale<P: MaskPixel>(img: &mut Image<P>) -> ShapeFxResult<()> {
    for p in img.pixels_mut() {
        let luma = p.to_luma().0[0];
        p.apply_without_alpha(|_| luma);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/filters.rs"]
mod tests;
