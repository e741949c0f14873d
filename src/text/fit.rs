use crate::foundation::error::{ShapeFxError, ShapeFxResult};

/// Width and height of laid out text, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextExtent {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl TextExtent {
    /// Extent from width and height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Something that can lay out text at a given font size and report its extent.
///
/// `wrap_width` of `None` measures a single line.
pub trait TextMeasure {
    /// Measure `text` at `font_size`.
    fn measure(
        &mut self,
        text: &str,
        font_size: f64,
        wrap_width: Option<f64>,
    ) -> ShapeFxResult<TextExtent>;
}

impl<F> TextMeasure for F
where
    F: FnMut(&str, f64, Option<f64>) -> ShapeFxResult<TextExtent>,
{
    fn measure(
        &mut self,
        text: &str,
        font_size: f64,
        wrap_width: Option<f64>,
    ) -> ShapeFxResult<TextExtent> {
        self(text, font_size, wrap_width)
    }
}

/// Font size search parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FitOptions {
    /// Wrap lines at the target width and search on height.
    pub wrap: bool,
    /// Smallest size ever returned.
    pub min_size: f64,
    /// Largest size ever returned.
    pub max_size: f64,
    /// Size used for the single-line measurement.
    pub reference_size: f64,
    /// Bisection stops once the bracket is this narrow.
    pub tolerance: f64,
    /// Hard cap on bisection steps.
    pub max_iterations: u32,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            wrap: false,
            min_size: 1.0,
            max_size: 512.0,
            reference_size: 10.0,
            tolerance: 0.25,
            max_iterations: 32,
        }
    }
}

impl FitOptions {
    /// Options for wrapped text.
    pub fn wrapped() -> Self {
        Self {
            wrap: true,
            ..Self::default()
        }
    }

    /// Set the allowed size range.
    pub fn with_size_range(mut self, min_size: f64, max_size: f64) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    /// Set the single-line reference size.
    pub fn with_reference_size(mut self, size: f64) -> Self {
        self.reference_size = size;
        self
    }

    /// Reject ranges and limits that cannot produce a size.
    pub fn validate(&self) -> ShapeFxResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.min_size) || !positive(self.max_size) || self.min_size > self.max_size {
            return Err(ShapeFxError::validation(format!(
                "font size range must satisfy 0 < min <= max, got [{}, {}]",
                self.min_size, self.max_size
            )));
        }
        if !positive(self.reference_size) {
            return Err(ShapeFxError::validation("reference_size must be finite and > 0"));
        }
        if !positive(self.tolerance) {
            return Err(ShapeFxError::validation("tolerance must be finite and > 0"));
        }
        if self.max_iterations == 0 {
            return Err(ShapeFxError::validation("max_iterations must be >= 1"));
        }
        Ok(())
    }
}

/// Scale that makes `measured` fit inside `target` on both axes.
pub fn single_line_scale(target: TextExtent, measured: TextExtent) -> f64 {
    (target.width / measured.width).min(target.height / measured.height)
}

/// Box left inside `width x height` after removing `padding` on every side.
pub fn padded_target(width: f64, height: f64, padding: f64) -> ShapeFxResult<TextExtent> {
    let t = TextExtent::new(width - 2.0 * padding, height - 2.0 * padding);
    if !t.is_measurable() {
        return Err(ShapeFxError::validation(format!(
            "padding {padding} leaves no room inside {width}x{height}"
        )));
    }
    Ok(t)
}

/// Pick the font size at which `text` fits `target`.
///
/// Single-line mode measures once at `reference_size` and scales linearly. Wrapped mode wraps
/// at the target width and bisects for the largest size whose height still fits. The result is
/// always within `[min_size, max_size]`.
#[tracing::instrument(skip(text, opts, measure), fields(chars = text.chars().count(), wrap = opts.wrap))]
pub fn fit_font_size<M>(
    text: &str,
    target: TextExtent,
    opts: &FitOptions,
    measure: &mut M,
) -> ShapeFxResult<f64>
where
    M: TextMeasure + ?Sized,
{
    opts.validate()?;
    if !target.is_measurable() {
        return Err(ShapeFxError::validation(format!(
            "target box must be finite and non-empty, got {}x{}",
            target.width, target.height
        )));
    }

    if opts.wrap {
        fit_wrapped(text, target, opts, measure)
    } else {
        let measured = measure_with(measure, text, opts.reference_size, None)?;
        if !measured.is_measurable() {
            return Err(ShapeFxError::measurement(format!(
                "text measured as {}x{} at size {}",
                measured.width, measured.height, opts.reference_size
            )));
        }
        let size = opts.reference_size * single_line_scale(target, measured);
        Ok(size.clamp(opts.min_size, opts.max_size))
    }
}

fn fit_wrapped<M>(
    text: &str,
    target: TextExtent,
    opts: &FitOptions,
    measure: &mut M,
) -> ShapeFxResult<f64>
where
    M: TextMeasure + ?Sized,
{
    let mut fits = |size: f64| -> ShapeFxResult<bool> {
        let e = measure_with(measure, text, size, Some(target.width))?;
        if !e.height.is_finite() {
            return Err(ShapeFxError::measurement(format!(
                "text height is not finite at size {size}"
            )));
        }
        Ok(e.height <= target.height)
    };

    if !fits(opts.min_size)? {
        tracing::debug!(min_size = opts.min_size, "text overflows even at the minimum size");
        return Ok(opts.min_size);
    }
    if fits(opts.max_size)? {
        return Ok(opts.max_size);
    }

    let (mut lo, mut hi) = (opts.min_size, opts.max_size);
    let mut iterations = 0;
    while hi - lo > opts.tolerance {
        if iterations == opts.max_iterations {
            tracing::debug!(lo, hi, "font size search hit the iteration cap");
            break;
        }
        iterations += 1;
        let mid = 0.5 * (lo + hi);
        if fits(mid)? {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(lo)
}

fn measure_with<M>(
    measure: &mut M,
    text: &str,
    size: f64,
    wrap_width: Option<f64>,
) -> ShapeFxResult<TextExtent>
where
    M: TextMeasure + ?Sized,
{
    measure
        .measure(text, size, wrap_width)
        .map_err(|e| match e {
            ShapeFxError::MeasurementUnavailable(_) => e,
            other => ShapeFxError::measurement(other.to_string()),
        })
}

#[cfg(test)]
#[path = "../../tests/unit/text/fit.rs"]
mod tests;
