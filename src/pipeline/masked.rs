use image::imageops;
use rayon::prelude::*;

use crate::algebra::region::Region;
use crate::foundation::core::PixelRect;
use crate::foundation::error::{ShapeFxError, ShapeFxResult};
use crate::pipeline::pixel::{Image, MaskPixel};

/// Largest accepted subpixel grid size per axis.
pub const MAX_SUBPIXEL_DEPTH: u32 = 16;

/// Options controlling how a region is turned into per-pixel coverage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CompositeOpts {
    /// Sample coverage on a subpixel grid instead of the pixel center only.
    pub antialias: bool,
    /// Grid size per axis when antialiasing, in `1..=MAX_SUBPIXEL_DEPTH`.
    pub subpixel_depth: u32,
    /// Composite rows on a dedicated rayon pool.
    pub parallel: bool,
    /// Worker count for the parallel pool; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for CompositeOpts {
    fn default() -> Self {
        Self {
            antialias: true,
            subpixel_depth: 4,
            parallel: false,
            threads: None,
        }
    }
}

impl CompositeOpts {
    /// Toggle antialiasing.
    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    /// Set the subpixel grid size.
    pub fn with_subpixel_depth(mut self, depth: u32) -> Self {
        self.subpixel_depth = depth;
        self
    }

    /// Enable row-parallel compositing with an optional worker count.
    pub fn with_parallel(mut self, threads: Option<usize>) -> Self {
        self.parallel = true;
        self.threads = threads;
        self
    }

    /// Reject option combinations that cannot be honored.
    pub fn validate(&self) -> ShapeFxResult<()> {
        if !(1..=MAX_SUBPIXEL_DEPTH).contains(&self.subpixel_depth) {
            return Err(ShapeFxError::validation(format!(
                "composite 'subpixel_depth' must be in 1..={MAX_SUBPIXEL_DEPTH}, got {}",
                self.subpixel_depth
            )));
        }
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(ShapeFxError::validation(
                "composite 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }

    fn sample_depth(&self) -> u32 {
        if self.antialias {
            self.subpixel_depth
        } else {
            1
        }
    }
}

/// Run `effect` on a copy of `source` and keep its result only inside `region`.
///
/// Equivalent to [`apply_inside_with`] with default options.
pub fn apply_inside<P, F>(source: &Image<P>, region: &Region, effect: F) -> ShapeFxResult<Image<P>>
where
    P: MaskPixel,
    F: FnOnce(&mut Image<P>) -> ShapeFxResult<()>,
{
    apply_inside_with(source, region, &CompositeOpts::default(), effect)
}

/// Run `effect` on a copy of `source` and blend its result back inside `region`.
///
/// Each pixel is interpolated between source and effect output by the fraction of its square
/// covered by the region. The effect sees the whole image, so filters that sample neighbors
/// behave the same near the region edge as they would unmasked. Returns a copy of `source`
/// without calling `effect` when the region misses the image.
#[tracing::instrument(
    skip(source, region, effect),
    fields(width = source.width(), height = source.height())
)]
pub fn apply_inside_with<P, F>(
    source: &Image<P>,
    region: &Region,
    opts: &CompositeOpts,
    effect: F,
) -> ShapeFxResult<Image<P>>
where
    P: MaskPixel,
    F: FnOnce(&mut Image<P>) -> ShapeFxResult<()>,
{
    opts.validate()?;
    let Some(window) = mask_window(source, region) else {
        return Ok(source.clone());
    };

    let mut work = source.clone();
    effect(&mut work)?;
    if work.dimensions() != source.dimensions() {
        return Err(ShapeFxError::evaluation(format!(
            "effect changed image size from {:?} to {:?}",
            source.dimensions(),
            work.dimensions()
        )));
    }
    let patch = imageops::crop_imm(&work, window.x, window.y, window.width, window.height)
        .to_image();
    drop(work);

    let mut out = source.clone();
    composite_window(&mut out, window, region, opts, |dst, wx, wy, coverage| {
        *dst = dst.blend_coverage(patch.get_pixel(wx, wy), coverage);
    })?;
    Ok(out)
}

/// Scale alpha by `1 - coverage` inside `region`, making it transparent.
///
/// Pixel formats without alpha come back unchanged.
#[tracing::instrument(
    skip(source, region),
    fields(width = source.width(), height = source.height())
)]
pub fn clear_inside<P>(
    source: &Image<P>,
    region: &Region,
    opts: &CompositeOpts,
) -> ShapeFxResult<Image<P>>
where
    P: MaskPixel,
{
    opts.validate()?;
    let mut out = source.clone();
    if let Some(window) = mask_window(source, region) {
        composite_window(&mut out, window, region, opts, |dst, _, _, coverage| {
            *dst = dst.punch_alpha(coverage);
        })?;
    }
    Ok(out)
}

fn mask_window<P: MaskPixel>(source: &Image<P>, region: &Region) -> Option<PixelRect> {
    if region.is_empty() {
        tracing::debug!("empty region, image left unchanged");
        return None;
    }
    let (w, h) = source.dimensions();
    let window = PixelRect::covering(region.bounds(), w, h);
    if window.is_none() {
        tracing::debug!(bounds = ?region.bounds(), "region outside image, image left unchanged");
    }
    window
}

/// Visit every pixel of `window` with non-zero coverage.
///
/// `op` receives the destination pixel, its coordinates relative to the window and the
/// coverage in `(0, 1]`.
fn composite_window<P, F>(
    out: &mut Image<P>,
    window: PixelRect,
    region: &Region,
    opts: &CompositeOpts,
    op: F,
) -> ShapeFxResult<()>
where
    P: MaskPixel,
    F: Fn(&mut P, u32, u32, f32) + Sync,
{
    let depth = opts.sample_depth();
    let channels = usize::from(P::CHANNEL_COUNT);
    let stride = out.width() as usize * channels;
    let buf: &mut [P::Subpixel] = out;
    let rows = &mut buf[window.y as usize * stride..window.bottom() as usize * stride];

    let row_op = |(j, row): (usize, &mut [P::Subpixel])| {
        let y = window.y + j as u32;
        let span = &mut row[window.x as usize * channels..window.right() as usize * channels];
        for (i, px) in span.chunks_exact_mut(channels).enumerate() {
            let x = window.x + i as u32;
            let coverage = region.coverage(x, y, depth);
            if coverage > 0.0 {
                op(P::from_slice_mut(px), i as u32, j as u32, coverage);
            }
        }
    };

    if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        pool.install(|| rows.par_chunks_mut(stride).enumerate().for_each(row_op));
    } else {
        rows.chunks_mut(stride).enumerate().for_each(row_op);
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> ShapeFxResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ShapeFxError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/masked.rs"]
mod tests;
