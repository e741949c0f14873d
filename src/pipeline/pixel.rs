use image::{ImageBuffer, Pixel, Primitive};

use crate::foundation::math::{lerp_f32, mul_div255_u8, unit_to_u8};

/// Owned image buffer over pixel type `P`.
pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Channel storage types the compositor knows how to blend.
pub trait Channel: Primitive + Send + Sync {
    /// Interpolate from `self` (t = 0) to `other` (t = 1).
    ///
    /// Exact at both ends and when `self == other`.
    fn lerp(self, other: Self, t: f32) -> Self;

    /// Multiply by a `[0, 1]` factor.
    fn scale(self, factor: f32) -> Self;

    /// Raw channel value as `f32`.
    fn to_sample(self) -> f32;

    /// Nearest representable channel value.
    fn from_sample(v: f32) -> Self;
}

impl Channel for u8 {
    fn lerp(self, other: Self, t: f32) -> Self {
        if self == other || t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        lerp_f32(f32::from(self), f32::from(other), t)
            .round()
            .clamp(0.0, 255.0) as u8
    }

    fn scale(self, factor: f32) -> Self {
        mul_div255_u8(u16::from(self), u16::from(unit_to_u8(factor)))
    }

    fn to_sample(self) -> f32 {
        f32::from(self)
    }

    fn from_sample(v: f32) -> Self {
        v.round().clamp(0.0, 255.0) as u8
    }
}

impl Channel for u16 {
    fn lerp(self, other: Self, t: f32) -> Self {
        if self == other || t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        lerp_f32(f32::from(self), f32::from(other), t)
            .round()
            .clamp(0.0, 65535.0) as u16
    }

    fn scale(self, factor: f32) -> Self {
        (f32::from(self) * factor.clamp(0.0, 1.0)).round() as u16
    }

    fn to_sample(self) -> f32 {
        f32::from(self)
    }

    fn from_sample(v: f32) -> Self {
        v.round().clamp(0.0, 65535.0) as u16
    }
}

impl Channel for f32 {
    fn lerp(self, other: Self, t: f32) -> Self {
        if self == other || t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        lerp_f32(self, other, t)
    }

    fn scale(self, factor: f32) -> Self {
        self * factor.clamp(0.0, 1.0)
    }

    fn to_sample(self) -> f32 {
        self
    }

    fn from_sample(v: f32) -> Self {
        v
    }
}

/// Pixel formats usable with the masked compositor.
///
/// Implemented for every `image` pixel whose channels are `u8`, `u16` or `f32`.
pub trait MaskPixel: Pixel<Subpixel: Channel> + Send + Sync + 'static {
    /// Per-channel interpolation towards `other` by `coverage`.
    fn blend_coverage(&self, other: &Self, coverage: f32) -> Self {
        self.map2(other, |a, b| a.lerp(b, coverage))
    }

    /// Scale alpha by `1 - coverage`, leaving color channels untouched.
    ///
    /// Formats without alpha are returned unchanged.
    fn punch_alpha(&self, coverage: f32) -> Self {
        let keep = 1.0 - coverage.clamp(0.0, 1.0);
        self.map_with_alpha(|c| c, |a| a.scale(keep))
    }
}

impl<P> MaskPixel for P where P: Pixel<Subpixel: Channel> + Send + Sync + 'static {}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/pixel.rs"]
mod tests;
