//! shapefx is a shape-driven compositing engine for raster images.
//!
//! Vector shapes are combined with boolean set operations into a [`Region`], which then acts as
//! an antialiased mask: an arbitrary effect runs on a copy of the image and is blended back only
//! where the region covers it.
//!
//! - Build shapes from [`Primitive`]s or raw [`BezPath`]s and combine them with [`combine`] or
//!   [`build_mask`] ([`MaskMode::Combined`] or [`MaskMode::Layered`]).
//! - Apply effects inside a region with [`apply_inside`] / [`apply_inside_with`], or make it
//!   transparent with [`clear_inside`]. Both are generic over `image` pixel formats with `u8`,
//!   `u16` or `f32` channels.
//! - Round image corners with [`rounded_corners`], [`apply_rounded_corners`] and [`to_avatar`].
//! - Pick a font size for a box with [`fit_font_size`], measuring through any [`TextMeasure`]
//!   such as [`ParleyMeasurer`].
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use shapefx::{Point, Primitive, Region, apply_inside, blur};
//!
//! let img = RgbaImage::from_pixel(64, 64, Rgba([200, 40, 40, 255]));
//! let star = Region::from_primitive(&Primitive::star(Point::new(32.0, 32.0), 5, 12.0, 24.0))?;
//! let out = apply_inside(&img, &star, |work| blur(work, 3.0))?;
//! assert_eq!(out.dimensions(), img.dimensions());
//! # Ok::<(), shapefx::ShapeFxError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod algebra;
mod assets;
mod effects;
mod foundation;
mod geometry;
mod pipeline;
mod text;

pub use crate::algebra::combine::{ClipOp, EffectRegion, MaskMode, build_mask, combine};
pub use crate::algebra::region::Region;
pub use crate::assets::decode::{
    Encoding, decode_image, encode_image, load_image, save_image, save_image_with,
};
pub use crate::effects::filters::{blur, grayscale, pixelate};
pub use crate::effects::fx::{Effect, EffectChain, EffectInstance, normalize_effects, parse_effect};
pub use crate::foundation::core::{Affine, BezPath, PixelRect, Point, Rect, Vec2};
pub use crate::foundation::error::{ShapeFxError, ShapeFxResult};
pub use crate::geometry::path::{GlyphPlacement, Path};
pub use crate::geometry::primitives::{Primitive, build_path};
pub use crate::geometry::transform;
pub use crate::pipeline::corners::{apply_rounded_corners, rounded_corners, to_avatar};
pub use crate::pipeline::masked::{
    CompositeOpts, MAX_SUBPIXEL_DEPTH, apply_inside, apply_inside_with, clear_inside,
};
pub use crate::pipeline::pixel::{Channel, Image, MaskPixel};
pub use crate::text::fit::{
    FitOptions, TextExtent, TextMeasure, fit_font_size, padded_target, single_line_scale,
};
pub use crate::text::measure::ParleyMeasurer;
